//! Tab bar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::api::Transport;
use crate::tui::app::{ActiveView, App};

pub fn render<T: Transport>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let titles: Vec<Line> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())))
        .collect();

    let user = app
        .username()
        .map(|name| format!(" {} ", name))
        .unwrap_or_else(|| " sin sesion ".to_string());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" prs-admin ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(user).right_aligned());

    let tabs = Tabs::new(titles)
        .block(block)
        .select(app.active_view.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}
