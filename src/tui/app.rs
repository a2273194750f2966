//! Application state for the TUI
//!
//! The App struct owns the API client and holds all state needed for
//! rendering and handling events. Every request is made synchronously from
//! the event loop; the per-list busy flag rejects a second mutation while one
//! is in flight.

use zeroize::Zeroizing;

use crate::api::{ApiClient, Transport};
use crate::audit::{AuditEntry, AuditFilter};
use crate::auth;
use crate::config::Settings;
use crate::error::{AdminError, AdminResult};
use crate::models::{
    blank_to_none, AppUser, Employee, EmployeePatch, Notices, Radio, RadioPatch, Resource, Role,
    SapUser, SapUserPatch,
};
use crate::services::employee::MSG_EMPLOYEE_REQUIRED;
use crate::services::{
    AppUserService, AuditService, EmployeeService, RadioService, SapUserService,
};
use crate::storage::SessionStore;
use crate::view::{CatalogState, Searchable};

use super::dialogs::{FormKind, FormState, LoginFormState};
use super::widgets::{Notification, TextInput};

pub const MSG_BUSY: &str = "Operacion en curso, espera un momento.";
pub const MSG_NO_SELECTION: &str = "Selecciona un registro.";

/// Top-level tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Catalogs,
    Audit,
    Users,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [ActiveView::Catalogs, ActiveView::Audit, ActiveView::Users];

    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Catalogs => "Catalogos",
            ActiveView::Audit => "Auditoria",
            ActiveView::Users => "Usuarios del sistema",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Sub-tab inside the Catalogs tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogTab {
    #[default]
    Employees,
    Radios,
    SapUsers,
}

impl CatalogTab {
    pub const ALL: [CatalogTab; 3] = [CatalogTab::Employees, CatalogTab::Radios, CatalogTab::SapUsers];

    pub fn title(self) -> &'static str {
        match self {
            CatalogTab::Employees => "Empleados",
            CatalogTab::Radios => "Radios",
            CatalogTab::SapUsers => "Usuarios SAP",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A list fetched from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Employees,
    Radios,
    SapUsers,
    Users,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Employees,
        Collection::Radios,
        Collection::SapUsers,
        Collection::Users,
    ];

    /// Catalog mutations show up in the audit log; system users do not
    pub fn is_catalog(self) -> bool {
        self != Collection::Users
    }

    pub fn notices(self) -> Notices {
        match self {
            Collection::Employees => Employee::NOTICES,
            Collection::Radios => Radio::NOTICES,
            Collection::SapUsers => SapUser::NOTICES,
            Collection::Users => AppUser::NOTICES,
        }
    }
}

impl From<CatalogTab> for Collection {
    fn from(tab: CatalogTab) -> Self {
        match tab {
            CatalogTab::Employees => Collection::Employees,
            CatalogTab::Radios => Collection::Radios,
            CatalogTab::SapUsers => Collection::SapUsers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the list filter
    Filter,
}

/// A delete waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    Employee(String),
    Radio(String),
    SapUser(String),
    User { id: i64, username: String },
}

impl PendingDelete {
    pub fn message(&self) -> String {
        match self {
            PendingDelete::Employee(cedula) => format!("Eliminar el empleado {}?", cedula),
            PendingDelete::Radio(code) => format!("Eliminar el radio {}?", code),
            PendingDelete::SapUser(username) => format!("Eliminar el usuario SAP {}?", username),
            PendingDelete::User { username, .. } => format!("Eliminar el usuario {}?", username),
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            PendingDelete::Employee(_) => Collection::Employees,
            PendingDelete::Radio(_) => Collection::Radios,
            PendingDelete::SapUser(_) => Collection::SapUsers,
            PendingDelete::User { .. } => Collection::Users,
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Login(LoginFormState),
    Form(FormState),
    Confirm(PendingDelete),
    Help,
}

/// Audit tab state
#[derive(Debug, Clone, Default)]
pub struct AuditState {
    pub entries: Vec<AuditEntry>,
    pub filter: AuditFilter,
    /// An explicit refresh is queued or running
    pub loading: bool,
    /// Message of the last failed explicit refresh
    pub error: Option<String>,
    pub selected: usize,
    pub loaded: bool,
}

impl AuditState {
    pub fn visible(&self) -> Vec<&AuditEntry> {
        self.filter.apply(&self.entries)
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

/// Navigation shared by every paginated list, whatever the record type
pub trait ListControls {
    fn filter_text(&self) -> &str;
    fn apply_filter(&mut self, filter: String);
    fn select_next(&mut self);
    fn select_prev(&mut self);
    fn next_page(&mut self) -> bool;
    fn prev_page(&mut self) -> bool;
}

impl<R: Searchable> ListControls for CatalogState<R> {
    fn filter_text(&self) -> &str {
        self.filter()
    }

    fn apply_filter(&mut self, filter: String) {
        self.set_filter(filter);
    }

    fn select_next(&mut self) {
        CatalogState::select_next(self);
    }

    fn select_prev(&mut self) {
        CatalogState::select_prev(self);
    }

    fn next_page(&mut self) -> bool {
        CatalogState::next_page(self)
    }

    fn prev_page(&mut self) -> bool {
        CatalogState::prev_page(self)
    }
}

/// Main application state
pub struct App<T: Transport> {
    pub client: ApiClient<T>,
    store: SessionStore,

    /// strftime format for timestamps
    pub date_format: String,

    /// How many audit entries each refresh asks for
    pub audit_limit: u32,

    pub should_quit: bool,
    pub active_view: ActiveView,
    pub catalog_tab: CatalogTab,
    pub input_mode: InputMode,
    pub active_dialog: ActiveDialog,

    pub employees: CatalogState<Employee>,
    pub radios: CatalogState<Radio>,
    pub sap_users: CatalogState<SapUser>,
    pub users: CatalogState<AppUser>,
    pub audit: AuditState,

    /// Text box shown while in filter mode
    pub filter_input: TextInput,

    pub notification: Option<Notification>,

    /// Full reload queued for after the next draw
    pending_refresh: bool,
}

impl<T: Transport> App<T> {
    /// Create the app; without a stored session it opens on the login dialog
    pub fn new(client: ApiClient<T>, store: SessionStore, settings: &Settings) -> Self {
        let active_dialog = if client.session().is_authenticated() {
            ActiveDialog::None
        } else {
            ActiveDialog::Login(LoginFormState::new())
        };

        Self {
            client,
            store,
            date_format: settings.date_format.clone(),
            audit_limit: settings.audit_limit,
            should_quit: false,
            active_view: ActiveView::default(),
            catalog_tab: CatalogTab::default(),
            input_mode: InputMode::default(),
            active_dialog,
            employees: CatalogState::new(),
            radios: CatalogState::new(),
            sap_users: CatalogState::new(),
            users: CatalogState::new(),
            audit: AuditState::default(),
            filter_input: TextInput::new().label("Filtro"),
            notification: None,
            pending_refresh: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the notification once its time is up
    pub fn on_tick(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }

    pub fn username(&self) -> Option<&str> {
        self.client.session().username()
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn open_help(&mut self) {
        self.active_dialog = ActiveDialog::Help;
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.input_mode = InputMode::Normal;
    }

    pub fn next_view(&mut self) {
        self.switch_view(self.active_view.next());
    }

    pub fn next_catalog_tab(&mut self) {
        self.catalog_tab = self.catalog_tab.next();
        self.input_mode = InputMode::Normal;
    }

    pub fn prev_catalog_tab(&mut self) {
        self.catalog_tab = self.catalog_tab.prev();
        self.input_mode = InputMode::Normal;
    }

    /// The list under the cursor; the audit tab has none
    pub fn current_collection(&self) -> Option<Collection> {
        match self.active_view {
            ActiveView::Catalogs => Some(self.catalog_tab.into()),
            ActiveView::Users => Some(Collection::Users),
            ActiveView::Audit => None,
        }
    }

    pub fn current_list_mut(&mut self) -> Option<&mut dyn ListControls> {
        let list: &mut dyn ListControls = match self.current_collection()? {
            Collection::Employees => &mut self.employees,
            Collection::Radios => &mut self.radios,
            Collection::SapUsers => &mut self.sap_users,
            Collection::Users => &mut self.users,
        };
        Some(list)
    }

    /// Fetch every list and the audit log
    pub fn refresh_all(&mut self) {
        for collection in Collection::ALL {
            if !self.reload(collection) {
                return;
            }
        }
        self.audit.loading = true;
        self.reload_audit(true);
    }

    /// Refresh what the current tab shows
    pub fn refresh_current(&mut self) {
        match self.current_collection() {
            Some(collection) => {
                if self.reload(collection) {
                    self.notify(Notification::info("Listado actualizado."));
                }
            }
            None => self.request_audit_refresh(),
        }
    }

    /// Replace one list with a fresh fetch; false (and a notification) on failure
    pub fn reload(&mut self, collection: Collection) -> bool {
        let result = match collection {
            Collection::Employees => EmployeeService::new(&self.client)
                .list()
                .map(|items| self.employees.replace_items(items)),
            Collection::Radios => RadioService::new(&self.client)
                .list()
                .map(|items| self.radios.replace_items(items)),
            Collection::SapUsers => SapUserService::new(&self.client)
                .list()
                .map(|items| self.sap_users.replace_items(items)),
            Collection::Users => AppUserService::new(&self.client)
                .list()
                .map(|items| self.users.replace_items(items)),
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                self.report_error(&err);
                false
            }
        }
    }

    /// Queue an explicit audit refresh so the loading state is drawn first
    pub fn request_audit_refresh(&mut self) {
        self.audit.loading = true;
    }

    /// Queue a reload of everything, run once the screen has been drawn
    pub fn request_refresh_all(&mut self) {
        self.pending_refresh = true;
    }

    pub fn has_pending(&self) -> bool {
        self.pending_refresh || self.audit.loading
    }

    /// Run work queued by the last key press; called after each draw
    pub fn run_pending(&mut self) {
        if std::mem::take(&mut self.pending_refresh) {
            self.refresh_all();
        } else if self.audit.loading {
            self.reload_audit(true);
        }
    }

    /// Fetch the audit log
    ///
    /// An explicit reload reports failures; a silent one swallows them and
    /// keeps the previous entries.
    pub fn reload_audit(&mut self, explicit: bool) {
        let result = AuditService::new(&self.client).recent(self.audit_limit);
        if explicit {
            self.audit.loading = false;
        }

        match result {
            Ok(entries) => {
                self.audit.entries = entries;
                self.audit.loaded = true;
                self.audit.error = None;
                self.audit.clamp_selection();
            }
            Err(err) if explicit => {
                self.audit.error = Some(err.user_message());
                self.report_error(&err);
            }
            Err(err) => {
                tracing::debug!(error = %err, "silent audit reload failed");
            }
        }
    }

    pub fn cycle_audit_filter(&mut self) {
        self.audit.filter = self.audit.filter.next();
        self.audit.selected = 0;
    }

    pub fn select_next(&mut self) {
        match self.current_list_mut() {
            Some(list) => list.select_next(),
            None => {
                if self.audit.selected + 1 < self.audit.visible().len() {
                    self.audit.selected += 1;
                }
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.current_list_mut() {
            Some(list) => list.select_prev(),
            None => self.audit.selected = self.audit.selected.saturating_sub(1),
        }
    }

    pub fn next_page(&mut self) {
        if let Some(list) = self.current_list_mut() {
            list.next_page();
        }
    }

    pub fn prev_page(&mut self) {
        if let Some(list) = self.current_list_mut() {
            list.prev_page();
        }
    }

    /// Enter filter mode, seeded with the current list's filter
    pub fn begin_filter(&mut self) {
        let Some(current) = self.current_list_mut().map(|list| list.filter_text().to_string())
        else {
            return;
        };
        self.filter_input.set_value(current);
        self.filter_input.focused = true;
        self.input_mode = InputMode::Filter;
    }

    /// Push the filter box text into the current list
    pub fn apply_filter_input(&mut self) {
        let text = self.filter_input.value().to_string();
        if let Some(list) = self.current_list_mut() {
            list.apply_filter(text);
        }
    }

    pub fn end_filter(&mut self) {
        self.filter_input.focused = false;
        self.input_mode = InputMode::Normal;
    }

    pub fn show_login(&mut self) {
        self.input_mode = InputMode::Normal;
        self.active_dialog = ActiveDialog::Login(LoginFormState::new());
    }

    /// Submit the login dialog; on success load everything
    pub fn submit_login(&mut self) {
        let ActiveDialog::Login(form) = &self.active_dialog else {
            return;
        };
        let username = form.username.value().to_string();
        let password = Zeroizing::new(form.password.value().to_string());

        match auth::login(&mut self.client, &self.store, &username, &password) {
            Ok(session) => {
                self.close_dialog();
                self.notify(Notification::success(format!(
                    "Sesion iniciada como {}.",
                    session.username
                )));
                self.refresh_all();
            }
            Err(err) => {
                if let ActiveDialog::Login(form) = &mut self.active_dialog {
                    form.error = Some(err.user_message());
                    form.password.clear();
                }
            }
        }
    }

    /// Forget the session and every loaded list
    pub fn logout(&mut self) {
        if let Err(err) = auth::logout(&mut self.client, &self.store) {
            tracing::warn!(error = %err, "could not clear stored session");
        }
        self.employees = CatalogState::new();
        self.radios = CatalogState::new();
        self.sap_users = CatalogState::new();
        self.users = CatalogState::new();
        self.audit = AuditState::default();
        self.show_login();
        self.notify(Notification::info("Sesion cerrada."));
    }

    /// Error notification; a missing or rejected session brings up the login
    fn report_error(&mut self, err: &AdminError) {
        tracing::warn!(error = %err, "request failed");
        if matches!(err, AdminError::NotAuthenticated) || err.status() == Some(401) {
            self.show_login();
        }
        self.notify(Notification::error(err.user_message()));
    }

    pub fn open_create_form(&mut self) {
        let form = match self.current_collection() {
            Some(Collection::Employees) => FormState::create_employee(),
            Some(Collection::Radios) => FormState::create_radio(),
            Some(Collection::SapUsers) => FormState::create_sap_user(),
            Some(Collection::Users) => FormState::create_user(),
            None => return,
        };
        self.active_dialog = ActiveDialog::Form(form);
    }

    pub fn open_edit_form(&mut self) {
        let form = match self.current_collection() {
            Some(Collection::Employees) => self.employees.selected_item().map(FormState::edit_employee),
            Some(Collection::Radios) => self.radios.selected_item().map(FormState::edit_radio),
            Some(Collection::SapUsers) => self.sap_users.selected_item().map(FormState::edit_sap_user),
            Some(Collection::Users) => self.users.selected_item().map(FormState::edit_user),
            None => return,
        };
        match form {
            Some(form) => self.active_dialog = ActiveDialog::Form(form),
            None => self.notify(Notification::warning(MSG_NO_SELECTION)),
        }
    }

    /// Ask for confirmation before deleting the selected record
    pub fn request_delete(&mut self) {
        let pending = match self.current_collection() {
            Some(Collection::Employees) => self
                .employees
                .selected_item()
                .map(|e| PendingDelete::Employee(e.cedula.clone())),
            Some(Collection::Radios) => self
                .radios
                .selected_item()
                .map(|r| PendingDelete::Radio(r.code.clone())),
            Some(Collection::SapUsers) => self
                .sap_users
                .selected_item()
                .map(|u| PendingDelete::SapUser(u.username.clone())),
            Some(Collection::Users) => self.users.selected_item().map(|u| PendingDelete::User {
                id: u.id,
                username: u.username.clone(),
            }),
            None => return,
        };
        match pending {
            Some(pending) => self.active_dialog = ActiveDialog::Confirm(pending),
            None => self.notify(Notification::warning(MSG_NO_SELECTION)),
        }
    }

    pub fn confirm_delete(&mut self) {
        let ActiveDialog::Confirm(pending) = std::mem::take(&mut self.active_dialog) else {
            return;
        };
        let collection = pending.collection();
        let result = self.mutate(collection, collection.notices().deleted, |client| match &pending {
            PendingDelete::Employee(cedula) => EmployeeService::new(client).delete(cedula),
            PendingDelete::Radio(code) => RadioService::new(client).delete(code),
            PendingDelete::SapUser(username) => SapUserService::new(client).delete(username),
            PendingDelete::User { id, .. } => AppUserService::new(client).delete(*id),
        });
        if let Err(err) = result {
            self.report_error(&err);
        }
    }

    /// Submit the record form; it stays open with the error on failure
    pub fn submit_form(&mut self) {
        let ActiveDialog::Form(mut form) = std::mem::take(&mut self.active_dialog) else {
            return;
        };

        if let Err(err) = self.apply_form(&form) {
            self.report_error(&err);
            if !matches!(self.active_dialog, ActiveDialog::Login(_)) {
                form.set_error(err.user_message());
                self.active_dialog = ActiveDialog::Form(form);
            }
        }
    }

    fn apply_form(&mut self, form: &FormState) -> AdminResult<()> {
        match &form.kind {
            FormKind::CreateEmployee => {
                self.mutate(Collection::Employees, Employee::NOTICES.created, |client| {
                    EmployeeService::new(client).create(form.text(0), form.text(1))
                })
            }
            FormKind::EditEmployee(cedula) => {
                let name = form.changed_text(0).map(|name| name.trim().to_string());
                if name.as_deref() == Some("") {
                    return Err(AdminError::validation(MSG_EMPLOYEE_REQUIRED));
                }
                let patch = EmployeePatch {
                    name,
                    active: form.changed_checked(1),
                };
                self.mutate(Collection::Employees, Employee::NOTICES.updated, |client| {
                    EmployeeService::new(client).update(cedula, &patch)
                })
            }
            FormKind::CreateRadio => {
                self.mutate(Collection::Radios, Radio::NOTICES.created, |client| {
                    RadioService::new(client).create(form.text(0), form.text(1))
                })
            }
            FormKind::EditRadio(code) => {
                let patch = RadioPatch {
                    description: form.changed_text(0).map(blank_to_none),
                    active: form.changed_checked(1),
                };
                self.mutate(Collection::Radios, Radio::NOTICES.updated, |client| {
                    RadioService::new(client).update(code, &patch)
                })
            }
            FormKind::CreateSapUser => {
                self.mutate(Collection::SapUsers, SapUser::NOTICES.created, |client| {
                    SapUserService::new(client).create(form.text(0), form.text(1))
                })
            }
            FormKind::EditSapUser(username) => {
                let patch = SapUserPatch {
                    employee_cedula: form.changed_text(0).map(blank_to_none),
                    active: form.changed_checked(1),
                };
                self.mutate(Collection::SapUsers, SapUser::NOTICES.updated, |client| {
                    SapUserService::new(client).update(username, &patch)
                })
            }
            FormKind::CreateUser => {
                let role = role_from_flag(form.checked(3));
                self.mutate(Collection::Users, AppUser::NOTICES.created, |client| {
                    AppUserService::new(client).create(form.text(0), form.text(1), form.text(2), role)
                })
            }
            FormKind::EditUser(id) => {
                let role = role_from_flag(form.checked(1));
                self.mutate(Collection::Users, AppUser::NOTICES.updated, |client| {
                    AppUserService::new(client).update(*id, form.checked(0), role, Some(form.text(2)))
                })
            }
        }
    }

    /// Run one mutation under the list's busy flag
    ///
    /// On success: notice, refetch of the list, and for catalogs a silent
    /// audit reload.
    fn mutate<F>(&mut self, collection: Collection, notice: &'static str, op: F) -> AdminResult<()>
    where
        F: FnOnce(&ApiClient<T>) -> AdminResult<()>,
    {
        if !self.begin_mutation(collection) {
            return Err(AdminError::validation(MSG_BUSY));
        }

        let result = op(&self.client);
        if result.is_ok() {
            self.notify(Notification::success(notice));
            self.reload(collection);
            if collection.is_catalog() {
                self.reload_audit(false);
            }
        }

        self.end_mutation(collection);
        result
    }

    fn begin_mutation(&mut self, collection: Collection) -> bool {
        match collection {
            Collection::Employees => self.employees.begin_mutation(),
            Collection::Radios => self.radios.begin_mutation(),
            Collection::SapUsers => self.sap_users.begin_mutation(),
            Collection::Users => self.users.begin_mutation(),
        }
    }

    fn end_mutation(&mut self, collection: Collection) {
        match collection {
            Collection::Employees => self.employees.end_mutation(),
            Collection::Radios => self.radios.end_mutation(),
            Collection::SapUsers => self.sap_users.end_mutation(),
            Collection::Users => self.users.end_mutation(),
        }
    }
}

fn role_from_flag(admin: bool) -> Role {
    if admin {
        Role::Admin
    } else {
        Role::Operator
    }
}
