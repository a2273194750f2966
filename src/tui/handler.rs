//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state: open dialog first, then filter mode, then the tab.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::Transport;

use super::app::{ActiveDialog, ActiveView, App, InputMode};
use super::dialogs::login::LoginField;
use super::event::Event;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event<T: Transport>(app: &mut App<T>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.on_tick(),
        Event::Resize(_, _) => {}
    }
    Ok(())
}

fn handle_key_event<T: Transport>(app: &mut App<T>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Login(_) => return handle_login_key(app, key),
        ActiveDialog::Form(_) => return handle_form_key(app, key),
        ActiveDialog::Confirm(_) => return handle_confirm_key(app, key),
        ActiveDialog::Help => return app.close_dialog(),
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Filter => handle_filter_key(app, key),
    }
}

fn handle_normal_key<T: Transport>(app: &mut App<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Tab => app.next_view(),
        KeyCode::Char('1') => app.switch_view(ActiveView::Catalogs),
        KeyCode::Char('2') => app.switch_view(ActiveView::Audit),
        KeyCode::Char('3') => app.switch_view(ActiveView::Users),
        KeyCode::Char('L') => app.logout(),
        KeyCode::Char('r') => app.refresh_current(),

        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),

        _ if app.active_view == ActiveView::Audit => handle_audit_key(app, key),
        _ => handle_list_key(app, key),
    }
}

/// Keys for the catalog and system-user lists
fn handle_list_key<T: Transport>(app: &mut App<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('[') if app.active_view == ActiveView::Catalogs => app.prev_catalog_tab(),
        KeyCode::Char(']') if app.active_view == ActiveView::Catalogs => app.next_catalog_tab(),
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char('/') => app.begin_filter(),
        KeyCode::Char('a') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        _ => {}
    }
}

fn handle_audit_key<T: Transport>(app: &mut App<T>, key: KeyEvent) {
    if key.code == KeyCode::Char('f') {
        app.cycle_audit_filter();
    }
}

fn handle_filter_key<T: Transport>(app: &mut App<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.end_filter(),
        code => {
            if edit_input(&mut app.filter_input, code) {
                app.apply_filter_input();
            }
        }
    }
}

fn handle_login_key<T: Transport>(app: &mut App<T>, key: KeyEvent) {
    let ActiveDialog::Login(form) = &mut app.active_dialog else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter if form.focus == LoginField::Username => form.toggle_focus(),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
        code => {
            edit_input(form.focused_input(), code);
        }
    }
}

fn handle_form_key<T: Transport>(app: &mut App<T>, key: KeyEvent) {
    let ActiveDialog::Form(form) = &mut app.active_dialog else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Char(' ') if form.focus_is_toggle() => {
            form.toggle_focused();
        }
        code => {
            if let Some(field) = form.focused_field() {
                if !field.is_toggle() {
                    edit_input(&mut field.input, code);
                }
            }
        }
    }
}

fn handle_confirm_key<T: Transport>(app: &mut App<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_delete()
        }
        KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}

/// Apply an editing key to a text field; true if the content changed
fn edit_input(input: &mut TextInput, code: KeyCode) -> bool {
    match code {
        KeyCode::Char(c) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{authed_client, RecordingTransport};
    use crate::api::ApiClient;
    use crate::auth::SessionContext;
    use crate::config::Settings;
    use crate::storage::SessionStore;
    use crate::tui::app::{CatalogTab, PendingDelete};
    use serde_json::json;
    use tempfile::TempDir;

    fn app_with(client: ApiClient<RecordingTransport>) -> (TempDir, App<RecordingTransport>) {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        let app = App::new(client, store, &Settings::default());
        (temp_dir, app)
    }

    fn press<T: Transport>(app: &mut App<T>, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text<T: Transport>(app: &mut App<T>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_tab_navigation() {
        let (_dir, mut app) = app_with(authed_client(RecordingTransport::new()));

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_view, ActiveView::Audit);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view, ActiveView::Users);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.catalog_tab, CatalogTab::Radios);
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.catalog_tab, CatalogTab::SapUsers);
    }

    #[test]
    fn test_quit_keys() {
        let (_dir, mut app) = app_with(authed_client(RecordingTransport::new()));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let (_dir, mut app) = app_with(ApiClient::new(RecordingTransport::new(), SessionContext::new()));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_in_filter_mode_does_not_trigger_commands() {
        let transport = RecordingTransport::new().respond(
            200,
            json!([
                {"cedula": "1001", "nombre": "Ana", "activo": true},
                {"cedula": "2002", "nombre": "Quique", "activo": true}
            ]),
        );
        let (_dir, mut app) = app_with(authed_client(transport));
        app.reload(crate::tui::app::Collection::Employees);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "quiq");
        assert!(!app.should_quit);
        assert_eq!(app.employees.filtered().len(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.employees.filter(), "quiq");
    }

    #[test]
    fn test_form_typing_and_cancel() {
        let (_dir, mut app) = app_with(authed_client(RecordingTransport::new()));
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "1001");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Ana q");

        let ActiveDialog::Form(form) = &app.active_dialog else {
            panic!("form not open");
        };
        assert_eq!(form.text(0), "1001");
        assert_eq!(form.text(1), "Ana q");

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
        assert_eq!(app.client.transport().request_count(), 0);
    }

    #[test]
    fn test_space_toggles_checkbox_in_form() {
        let (_dir, mut app) = app_with(authed_client(RecordingTransport::new()));
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char(' '));

        let ActiveDialog::Form(form) = &app.active_dialog else {
            panic!("form not open");
        };
        assert!(form.checked(3));
    }

    #[test]
    fn test_declined_confirmation_sends_nothing() {
        let (_dir, mut app) = app_with(authed_client(RecordingTransport::new()));
        app.active_dialog = ActiveDialog::Confirm(PendingDelete::Radio("RF-01".into()));

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.has_dialog());
        assert_eq!(app.client.transport().request_count(), 0);
    }

    #[test]
    fn test_login_enter_moves_to_password_first() {
        let (_dir, mut app) = app_with(ApiClient::new(RecordingTransport::new(), SessionContext::new()));
        type_text(&mut app, "ana");
        press(&mut app, KeyCode::Enter);

        let ActiveDialog::Login(form) = &app.active_dialog else {
            panic!("login closed");
        };
        assert_eq!(form.focus, LoginField::Password);
        assert_eq!(form.username.value(), "ana");
        assert_eq!(app.client.transport().request_count(), 0);
    }

    #[test]
    fn test_audit_filter_key() {
        let (_dir, mut app) = app_with(authed_client(RecordingTransport::new()));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.audit.filter, crate::audit::AuditFilter::Employee);
    }
}
