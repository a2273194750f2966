//! Paginated list rendering shared by the catalog and system-user tabs

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_page_bar;
use crate::tui::layout::ListLayout;
use crate::tui::widgets::TextInput;
use crate::view::{CatalogState, Paginator, Searchable};

/// Everything needed to draw one page of a list
pub struct ListView<'a> {
    pub title: &'a str,
    pub headers: &'a [&'a str],
    pub widths: &'a [Constraint],
    pub rows: Vec<Vec<String>>,
    pub selected: usize,
    pub paginator: &'a Paginator,
    pub filter: &'a str,
    pub loaded: bool,
    pub busy: bool,
}

impl<'a> ListView<'a> {
    pub fn from_state<R: Searchable>(
        title: &'a str,
        headers: &'a [&'a str],
        widths: &'a [Constraint],
        state: &'a CatalogState<R>,
        row: impl Fn(&R) -> Vec<String>,
    ) -> Self {
        Self {
            title,
            headers,
            widths,
            rows: state.page_items().into_iter().map(row).collect(),
            selected: state.selected_index(),
            paginator: state.paginator(),
            filter: state.filter(),
            loaded: state.is_loaded(),
            busy: state.is_busy(),
        }
    }
}

/// Draw filter line, table and page bar; `editing` is the filter box when
/// the user is typing into it
pub fn render(frame: &mut Frame, layout: &ListLayout, view: ListView, editing: Option<&TextInput>) {
    render_filter(frame, layout, &view, editing);
    render_table(frame, layout, &view);
    render_page_bar(frame, layout, view.paginator);
}

fn render_filter(frame: &mut Frame, layout: &ListLayout, view: &ListView, editing: Option<&TextInput>) {
    if let Some(input) = editing {
        frame.render_widget(input, layout.filter);
        return;
    }

    let line = if view.filter.is_empty() {
        Line::from(Span::styled(
            "/ para filtrar",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("Filtro: ", Style::default().fg(Color::Cyan)),
            Span::styled(view.filter, Style::default().fg(Color::Yellow)),
        ])
    };
    frame.render_widget(Paragraph::new(line), layout.filter);
}

fn render_table(frame: &mut Frame, layout: &ListLayout, view: &ListView) {
    let mut title = format!(" {} ({}) ", view.title, view.paginator.total_items());
    if view.busy {
        title.push_str("· guardando… ");
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    if view.rows.is_empty() {
        let message = if !view.loaded {
            "Sin datos. Pulsa r para recargar."
        } else if view.filter.is_empty() {
            "No hay registros."
        } else {
            "Sin resultados para el filtro."
        };
        let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(paragraph, layout.table);
        return;
    }

    let header = Row::new(view.headers.iter().map(|h| Cell::from(*h)))
        .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow));

    let rows = view.rows.iter().map(|cells| {
        let style = if cells.last().is_some_and(|c| c == "Inactivo") {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        Row::new(cells.iter().map(|c| Cell::from(c.as_str()))).style(style)
    });

    let table = Table::new(rows, view.widths.iter().copied())
        .header(header)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(view.selected));
    frame.render_stateful_widget(table, layout.table, &mut state);
}

fn render_page_bar(frame: &mut Frame, layout: &ListLayout, paginator: &Paginator) {
    let mut spans = vec![Span::styled(
        format!(
            "Pagina {} de {} · {} registros",
            paginator.page(),
            paginator.total_pages(),
            paginator.total_items()
        ),
        Style::default().fg(Color::White),
    )];

    let bar = format_page_bar(&paginator.buttons(), paginator.page());
    if !bar.is_empty() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(bar, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled("  (n/p)", Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), layout.pages);
}
