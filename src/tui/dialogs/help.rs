//! Help dialog
//!
//! Shows the keyboard shortcuts for the current tab

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::ActiveView;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, view: ActiveView) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Ayuda ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Generales"),
        Line::from(""),
        key_line("q", "Salir"),
        key_line("?", "Mostrar/ocultar ayuda"),
        key_line("Tab / 1-3", "Cambiar de pestana"),
        key_line("r", "Recargar"),
        key_line("L", "Cerrar sesion"),
        Line::from(""),
    ];

    match view {
        ActiveView::Catalogs | ActiveView::Users => {
            lines.push(section("Listados"));
            lines.push(Line::from(""));
            if view == ActiveView::Catalogs {
                lines.push(key_line("[ / ]", "Empleados, radios, usuarios SAP"));
            }
            lines.push(key_line("j/k", "Mover seleccion"));
            lines.push(key_line("n/p", "Pagina siguiente/anterior"));
            lines.push(key_line("/", "Filtrar"));
            lines.push(key_line("a", "Agregar"));
            lines.push(key_line("e", "Editar seleccionado"));
            lines.push(key_line("d", "Eliminar seleccionado"));
        }
        ActiveView::Audit => {
            lines.push(section("Auditoria"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Desplazar"));
            lines.push(key_line("f", "Cambiar filtro de entidad"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Cualquier tecla para cerrar",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}
