//! Audit log tab
//!
//! Each entry takes two or three lines: a header with the colored action,
//! the change summary, and the reason when there is one.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::api::Transport;
use crate::audit::{AuditAction, AuditEntry};
use crate::display::format_timestamp;
use crate::tui::app::App;

pub fn render<T: Transport>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let visible = app.audit.visible();
    render_header(frame, app, visible.len(), chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Registro de auditoria ");

    if visible.is_empty() {
        let message = if app.audit.loading {
            "Cargando…"
        } else if !app.audit.loaded {
            "Sin datos. Pulsa r para recargar."
        } else {
            "Sin registros para mostrar."
        };
        let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|entry| entry_item(entry, &app.date_format))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default().with_selected(Some(app.audit.selected));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn render_header<T: Transport>(frame: &mut Frame, app: &App<T>, shown: usize, area: Rect) {
    let mut spans = vec![
        Span::styled("Entidad: ", Style::default().fg(Color::Cyan)),
        Span::styled(app.audit.filter.label(), Style::default().fg(Color::Yellow)),
        Span::styled(" (f)", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("   {} de {} registros", shown, app.audit.entries.len())),
    ];

    if app.audit.loading {
        spans.push(Span::styled("   Cargando…", Style::default().fg(Color::Yellow)));
    } else if let Some(error) = &app.audit.error {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Green for creations, amber for updates, red for deletions
pub fn action_color(action: &AuditAction) -> Color {
    match action {
        AuditAction::Created => Color::Green,
        AuditAction::Updated => Color::Rgb(255, 191, 0),
        AuditAction::Deleted => Color::Red,
        AuditAction::Other(_) => Color::Gray,
    }
}

fn entry_item<'a>(entry: &'a AuditEntry, date_format: &str) -> ListItem<'a> {
    let mut header = vec![
        Span::styled(
            format!("{:<11}", entry.action.label()),
            Style::default()
                .fg(action_color(&entry.action))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", entry.aggregate.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(entry.id_ref.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {}  ", format_timestamp(&entry.at, date_format)),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(entry.actor_label()),
    ];
    if let Some(username) = entry.actor_username.as_deref().filter(|u| !u.is_empty()) {
        header.push(Span::styled(
            format!(" ({})", username),
            Style::default().fg(Color::Gray),
        ));
    }

    let mut lines = vec![
        Line::from(header),
        Line::from(Span::raw(format!("  {}", entry.summary_or_placeholder()))),
    ];
    if let Some(reason) = entry.reason_label() {
        lines.push(Line::from(Span::styled(
            format!("  {}", reason),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )));
    }

    ListItem::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_colors() {
        assert_eq!(action_color(&AuditAction::Created), Color::Green);
        assert_eq!(action_color(&AuditAction::Deleted), Color::Red);
        assert_eq!(action_color(&AuditAction::Other("RESTORED".into())), Color::Gray);
    }
}
