//! System users tab

use ratatui::{
    layout::{Constraint, Rect},
    Frame,
};

use crate::api::Transport;
use crate::display::catalog::{app_user_row, APP_USER_HEADERS};
use crate::tui::app::{App, InputMode};
use crate::tui::layout::ListLayout;

use super::list::{self, ListView};

const WIDTHS: [Constraint; 5] = [
    Constraint::Length(6),
    Constraint::Min(16),
    Constraint::Length(14),
    Constraint::Length(16),
    Constraint::Length(10),
];

pub fn render<T: Transport>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let layout = ListLayout::new(area, false);
    let date_format = app.date_format.as_str();
    let view = ListView::from_state(
        "Usuarios del sistema",
        &APP_USER_HEADERS,
        &WIDTHS,
        &app.users,
        |user| app_user_row(user, date_format),
    );

    let editing = (app.input_mode == InputMode::Filter).then_some(&app.filter_input);
    list::render(frame, &layout, view, editing);
}
