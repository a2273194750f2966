//! Toast notification widget
//!
//! One notification is shown at a time; a newer one replaces it.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Listo",
            Self::Warning => "Aviso",
            Self::Error => "Error",
        }
    }

    /// Errors stay up longer than confirmations
    fn default_duration_secs(&self) -> u64 {
        match self {
            Self::Error => 6,
            _ => 3,
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration_secs: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration_secs: notification_type.default_duration_secs(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.duration_secs
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();
        let title = self.notification.notification_type.title();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Bottom-right corner box sized for `message`
pub fn notification_area(message: &str, area: Rect) -> Rect {
    let width = (message.chars().count() as u16 + 4).clamp(24, 60).min(area.width);
    let height = if message.chars().count() as u16 + 4 > width { 4 } else { 3 };
    let height = height.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::success("Empleado registrado.");
        assert_eq!(n.message, "Empleado registrado.");
        assert_eq!(n.notification_type, NotificationType::Success);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_errors_linger() {
        assert!(Notification::error("x").duration_secs > Notification::info("x").duration_secs);
    }

    #[test]
    fn test_zero_duration_expires() {
        let mut n = Notification::info("x");
        n.duration_secs = 0;
        assert!(n.is_expired());
    }

    #[test]
    fn test_area_stays_inside() {
        let screen = Rect::new(0, 0, 40, 10);
        let area = notification_area(&"x".repeat(200), screen);
        assert!(area.right() <= screen.right());
        assert!(area.bottom() <= screen.bottom());
    }
}
