//! Catalogs tab: employees, radios and SAP users

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::api::Transport;
use crate::display::catalog::{
    employee_row, radio_row, sap_user_row, EMPLOYEE_HEADERS, RADIO_HEADERS, SAP_USER_HEADERS,
};
use crate::tui::app::{App, CatalogTab, InputMode};
use crate::tui::layout::ListLayout;

use super::list::{self, ListView};

const WIDTHS: [Constraint; 3] = [
    Constraint::Length(18),
    Constraint::Min(20),
    Constraint::Length(10),
];

pub fn render<T: Transport>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let layout = ListLayout::new(area, true);
    render_subtabs(frame, app.catalog_tab, layout.subtabs);

    let title = app.catalog_tab.title();
    let view = match app.catalog_tab {
        CatalogTab::Employees => {
            ListView::from_state(title, &EMPLOYEE_HEADERS, &WIDTHS, &app.employees, employee_row)
        }
        CatalogTab::Radios => {
            ListView::from_state(title, &RADIO_HEADERS, &WIDTHS, &app.radios, radio_row)
        }
        CatalogTab::SapUsers => {
            ListView::from_state(title, &SAP_USER_HEADERS, &WIDTHS, &app.sap_users, sap_user_row)
        }
    };

    let editing = (app.input_mode == InputMode::Filter).then_some(&app.filter_input);
    list::render(frame, &layout, view, editing);
}

fn render_subtabs(frame: &mut Frame, current: CatalogTab, area: Rect) {
    let mut spans = Vec::new();
    for tab in CatalogTab::ALL {
        let style = if tab == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(tab.title(), style));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled("[ / ] cambiar", Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
