//! TUI Views module
//!
//! One view per tab plus the tab bar and status bar. Shared list rendering
//! (filter line, table, page bar) lives in `list`.

pub mod audit;
pub mod catalog;
pub mod list;
pub mod status_bar;
pub mod tabs;
pub mod users;

use ratatui::Frame;

use crate::api::Transport;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{notification_area, NotificationWidget};

/// Render the entire application
pub fn render<T: Transport>(frame: &mut Frame, app: &App<T>) {
    let layout = AppLayout::new(frame.area());

    tabs::render(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Catalogs => catalog::render(frame, app, layout.main),
        ActiveView::Audit => audit::render(frame, app, layout.main),
        ActiveView::Users => users::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    render_dialog(frame, app);

    if let Some(notification) = &app.notification {
        let area = notification_area(&notification.message, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

fn render_dialog<T: Transport>(frame: &mut Frame, app: &App<T>) {
    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Login(state) => dialogs::login::render(frame, state),
        ActiveDialog::Form(state) => dialogs::form::render(frame, state),
        ActiveDialog::Confirm(pending) => dialogs::confirm::render(frame, &pending.message()),
        ActiveDialog::Help => dialogs::help::render(frame, app.active_view),
    }
}
