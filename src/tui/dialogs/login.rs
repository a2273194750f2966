//! Login dialog
//!
//! Shown on start when no session is stored, and after logout.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// State for the login form
#[derive(Debug, Clone)]
pub struct LoginFormState {
    pub username: TextInput,
    pub password: TextInput,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFormState {
    pub fn new() -> Self {
        let mut state = Self {
            username: TextInput::new().label("Usuario"),
            password: TextInput::new().label("Contrasena").masked(),
            focus: LoginField::Username,
            error: None,
        };
        state.set_focus(LoginField::Username);
        state
    }

    pub fn set_focus(&mut self, focus: LoginField) {
        self.focus = focus;
        self.username.focused = focus == LoginField::Username;
        self.password.focused = focus == LoginField::Password;
    }

    pub fn toggle_focus(&mut self) {
        let next = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
        self.set_focus(next);
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

pub fn render(frame: &mut Frame, state: &LoginFormState) {
    let area = centered_rect_fixed(52, 9, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Iniciar sesion ")
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

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Username
            Constraint::Length(1), // Password
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&state.username, chunks[1]);
    frame.render_widget(&state.password, chunks[2]);

    if let Some(error) = &state.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[4],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Entrar  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Campo  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Salir"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}
