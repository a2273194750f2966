//! Audit log rendering
//!
//! The backend records every mutation of the catalogs (employees, radios,
//! SAP users) with the record's state before and after. This module decodes
//! those entries and turns each before/after pair into a one-line summary.
//!
//! - `AuditEntry`: one immutable record fetched from `/audit-log/`
//! - `diff_summary`: the `"key: old -> new"` summary of an entry
//! - `value_to_text`: how a single JSON value is shown in a summary
//!
//! # Example
//!
//! ```rust,ignore
//! use prs_admin::audit::{diff_summary, AuditAction};
//! use serde_json::json;
//!
//! let before = json!({"nombre": "Ana", "activo": false});
//! let after = json!({"nombre": "Ana", "activo": true});
//! let summary = diff_summary(Some(&before), Some(&after), &AuditAction::Updated);
//! assert_eq!(summary, "activo: No -> Si");
//! ```

mod diff;
mod entry;

pub use diff::{canonical_json, deep_equal, diff_summary, value_to_text};
pub use entry::{Aggregate, AuditAction, AuditEntry, AuditFilter, EMPTY_SUMMARY};
