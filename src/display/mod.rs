//! Display formatting for terminal output
//!
//! Provides plain-text tables for the catalog listings, the audit entry
//! layout, and the page-button bar.

pub mod audit;
pub mod catalog;

pub use audit::{format_audit_entry, format_audit_list, format_timestamp};
pub use catalog::{
    format_app_user_list, format_employee_list, format_page_bar, format_radio_list,
    format_sap_user_list, status_label,
};

/// Render rows under a header with columns padded to their widest cell
pub(crate) fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut output = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    output.push_str(&format_row(&header_cells, &widths));
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&format_row(&separator, &widths));
    for row in rows {
        output.push_str(&format_row(row, &widths));
    }
    output
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}
