//! Terminal User Interface module
//!
//! Interactive console with three tabs: catalogs (employees, radios, SAP
//! users), the audit log, and system users. Login is a modal dialog shown
//! whenever there is no usable session.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
