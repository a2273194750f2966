//! prs-admin - Administration console for the radio lending backend
//!
//! This library provides the core functionality of the console: an
//! authenticated REST client, the catalog services (employees, radios, SAP
//! users, system users), the audit log with its diff summaries, and the
//! list state (filter, pagination) shared by the command line and the TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `api`: HTTP transport and authenticated JSON client
//! - `auth`: Login, logout and the in-memory session
//! - `storage`: JSON files on disk (settings, session)
//! - `models`: Catalog records and their wire payloads
//! - `services`: Validation and CRUD calls per catalog
//! - `audit`: Audit entries and diff summaries
//! - `view`: Filtering, pagination and per-list state
//! - `display`: Plain-text tables for the command line
//! - `export`: CSV/JSON/YAML export of the audit log
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal console
//!
//! # Example
//!
//! ```rust,ignore
//! use prs_admin::api::{ApiClient, HttpTransport};
//! use prs_admin::config::{AdminPaths, Settings};
//! use prs_admin::services::EmployeeService;
//!
//! let paths = AdminPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let client = ApiClient::new(HttpTransport::from_settings(&settings)?, session);
//! let employees = EmployeeService::new(&client).list()?;
//! ```

pub mod api;
pub mod audit;
pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;
pub mod view;

pub use error::{AdminError, AdminResult};
