//! Record entry dialog
//!
//! One form type covers create and edit for every catalog and for system
//! users. Edit forms remember the initial values so only changed fields
//! end up in the patch.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{AppUser, Employee, Radio, Role, SapUser};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// What the form creates or edits; edit variants carry the record key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormKind {
    CreateEmployee,
    EditEmployee(String),
    CreateRadio,
    EditRadio(String),
    CreateSapUser,
    EditSapUser(String),
    CreateUser,
    EditUser(i64),
}

impl FormKind {
    pub fn title(&self) -> String {
        match self {
            Self::CreateEmployee => " Nuevo empleado ".into(),
            Self::EditEmployee(cedula) => format!(" Empleado {} ", cedula),
            Self::CreateRadio => " Nuevo radio ".into(),
            Self::EditRadio(code) => format!(" Radio {} ", code),
            Self::CreateSapUser => " Nuevo usuario SAP ".into(),
            Self::EditSapUser(username) => format!(" Usuario SAP {} ", username),
            Self::CreateUser => " Nuevo usuario ".into(),
            Self::EditUser(id) => format!(" Usuario #{} ", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Toggle,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub kind: FieldKind,
    pub input: TextInput,
    pub checked: bool,
    initial_text: String,
    initial_checked: bool,
}

impl FormField {
    fn text(label: &'static str, value: &str) -> Self {
        Self {
            label,
            kind: FieldKind::Text,
            input: TextInput::new().label(label).content(value),
            checked: false,
            initial_text: value.to_string(),
            initial_checked: false,
        }
    }

    fn secret(label: &'static str) -> Self {
        Self {
            kind: FieldKind::Secret,
            input: TextInput::new().label(label).masked(),
            ..Self::text(label, "")
        }
    }

    fn toggle(label: &'static str, checked: bool) -> Self {
        Self {
            label,
            kind: FieldKind::Toggle,
            input: TextInput::new(),
            checked,
            initial_text: String::new(),
            initial_checked: checked,
        }
    }

    pub fn is_toggle(&self) -> bool {
        self.kind == FieldKind::Toggle
    }
}

/// State for the record form
#[derive(Debug, Clone)]
pub struct FormState {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub error: Option<String>,
}

impl FormState {
    fn new(kind: FormKind, fields: Vec<FormField>) -> Self {
        let mut state = Self {
            kind,
            fields,
            focus: 0,
            error: None,
        };
        state.set_focus(0);
        state
    }

    pub fn create_employee() -> Self {
        Self::new(
            FormKind::CreateEmployee,
            vec![FormField::text("Cedula", ""), FormField::text("Nombre", "")],
        )
    }

    pub fn edit_employee(employee: &Employee) -> Self {
        Self::new(
            FormKind::EditEmployee(employee.cedula.clone()),
            vec![
                FormField::text("Nombre", &employee.name),
                FormField::toggle("Activo", employee.active),
            ],
        )
    }

    pub fn create_radio() -> Self {
        Self::new(
            FormKind::CreateRadio,
            vec![
                FormField::text("Codigo", ""),
                FormField::text("Descripcion", ""),
            ],
        )
    }

    pub fn edit_radio(radio: &Radio) -> Self {
        Self::new(
            FormKind::EditRadio(radio.code.clone()),
            vec![
                FormField::text("Descripcion", radio.description.as_deref().unwrap_or("")),
                FormField::toggle("Activo", radio.active),
            ],
        )
    }

    pub fn create_sap_user() -> Self {
        Self::new(
            FormKind::CreateSapUser,
            vec![
                FormField::text("Usuario SAP", ""),
                FormField::text("Cedula empleado", ""),
            ],
        )
    }

    pub fn edit_sap_user(user: &SapUser) -> Self {
        Self::new(
            FormKind::EditSapUser(user.username.clone()),
            vec![
                FormField::text("Cedula empleado", user.employee_cedula.as_deref().unwrap_or("")),
                FormField::toggle("Activo", user.active),
            ],
        )
    }

    pub fn create_user() -> Self {
        Self::new(
            FormKind::CreateUser,
            vec![
                FormField::text("Usuario", ""),
                FormField::secret("Contrasena"),
                FormField::secret("Confirmar"),
                FormField::toggle("Administrador", false),
            ],
        )
    }

    pub fn edit_user(user: &AppUser) -> Self {
        Self::new(
            FormKind::EditUser(user.id),
            vec![
                FormField::toggle("Activo", user.is_active),
                FormField::toggle("Administrador", user.role() == Role::Admin),
                FormField::secret("Nueva contrasena"),
            ],
        )
    }

    pub fn set_focus(&mut self, index: usize) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = index % self.fields.len();
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.input.focused = i == self.focus;
        }
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focus + 1);
    }

    pub fn prev_field(&mut self) {
        let len = self.fields.len().max(1);
        self.set_focus(self.focus + len - 1);
    }

    pub fn focused_field(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focus)
    }

    pub fn focus_is_toggle(&self) -> bool {
        self.fields.get(self.focus).is_some_and(FormField::is_toggle)
    }

    /// Flip the focused checkbox; false if the focus is on a text field
    pub fn toggle_focused(&mut self) -> bool {
        match self.focused_field() {
            Some(field) if field.is_toggle() => {
                field.checked = !field.checked;
                true
            }
            _ => false,
        }
    }

    pub fn text(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|field| field.input.value())
            .unwrap_or("")
    }

    pub fn checked(&self, index: usize) -> bool {
        self.fields.get(index).is_some_and(|field| field.checked)
    }

    /// The field's text if it differs from the initial value
    pub fn changed_text(&self, index: usize) -> Option<&str> {
        self.fields
            .get(index)
            .filter(|field| field.input.value().trim() != field.initial_text.trim())
            .map(|field| field.input.value())
    }

    pub fn changed_checked(&self, index: usize) -> Option<bool> {
        self.fields
            .get(index)
            .filter(|field| field.checked != field.initial_checked)
            .map(|field| field.checked)
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

pub fn render(frame: &mut Frame, state: &FormState) {
    let height = state.fields.len() as u16 + 7;
    let area = centered_rect_fixed(60, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(state.kind.title())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(state.fields.iter().map(|_| Constraint::Length(1)));
    constraints.extend([
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Error
        Constraint::Length(1), // Hints
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in state.fields.iter().enumerate() {
        let area = chunks[i + 1];
        if field.is_toggle() {
            render_toggle(frame, area, field, i == state.focus);
        } else {
            frame.render_widget(&field.input, area);
        }
    }

    let tail = state.fields.len() + 1;
    if let Some(error) = &state.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[tail + 1],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Guardar  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Campo  "),
        Span::styled("[Espacio]", Style::default().fg(Color::Cyan)),
        Span::raw(" Marcar  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancelar"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[tail + 2]);
}

fn render_toggle(frame: &mut Frame, area: Rect, field: &FormField, focused: bool) {
    let mark = if field.checked { "[x]" } else { "[ ]" };
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let mark_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let line = Line::from(vec![
        Span::styled(field.label, label_style),
        Span::raw(": "),
        Span::styled(mark, mark_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radio() -> Radio {
        Radio {
            id: Some(3),
            code: "RF-01".into(),
            description: Some("Motorola".into()),
            active: true,
        }
    }

    #[test]
    fn test_untouched_edit_form_has_no_changes() {
        let form = FormState::edit_radio(&radio());
        assert_eq!(form.kind, FormKind::EditRadio("RF-01".into()));
        assert_eq!(form.changed_text(0), None);
        assert_eq!(form.changed_checked(1), None);
    }

    #[test]
    fn test_changes_are_detected() {
        let mut form = FormState::edit_radio(&radio());
        if let Some(field) = form.focused_field() {
            field.input.clear();
        }
        form.next_field();
        assert!(form.toggle_focused());

        assert_eq!(form.changed_text(0), Some(""));
        assert_eq!(form.changed_checked(1), Some(false));
    }

    #[test]
    fn test_focus_wraps_and_toggle_ignores_text() {
        let mut form = FormState::create_user();
        assert!(!form.toggle_focused());

        form.prev_field();
        assert_eq!(form.focus, 3);
        assert!(form.toggle_focused());
        assert!(form.checked(3));

        form.next_field();
        assert_eq!(form.focus, 0);
        assert!(form.fields[0].input.focused);
        assert!(!form.fields[3].input.focused);
    }

    #[test]
    fn test_secret_fields_are_masked() {
        let form = FormState::create_user();
        assert!(form.fields[1].input.masked);
        assert!(form.fields[2].input.masked);
        assert!(!form.fields[0].input.masked);
    }
}
