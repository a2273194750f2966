//! Status bar view
//!
//! Shows where the user is and the key hints for the current mode

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::api::Transport;
use crate::tui::app::{ActiveView, App, InputMode};

pub fn render<T: Transport>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let location = match app.active_view {
        ActiveView::Catalogs => format!(" {} › {} ", app.active_view.title(), app.catalog_tab.title()),
        view => format!(" {} ", view.title()),
    };

    let mut spans = vec![Span::styled(
        location,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw(" "));
    spans.push(Span::styled(hints(app), Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints<T: Transport>(app: &App<T>) -> &'static str {
    if app.input_mode == InputMode::Filter {
        return "Escribe para filtrar · Enter/Esc terminar";
    }
    match app.active_view {
        ActiveView::Audit => "j/k mover · f entidad · r recargar · ? ayuda · q salir",
        _ => "a agregar · e editar · d eliminar · / filtrar · n/p pagina · ? ayuda · q salir",
    }
}
