//! Catalog listings

use crate::models::{AppUser, Employee, Radio, SapUser};
use crate::view::{PageButton, Paginator};

use super::audit::format_timestamp;
use super::format_table;

pub fn status_label(active: bool) -> &'static str {
    if active {
        "Activo"
    } else {
        "Inactivo"
    }
}

pub const EMPLOYEE_HEADERS: [&str; 3] = ["Cedula", "Nombre", "Estado"];
pub const RADIO_HEADERS: [&str; 3] = ["Codigo", "Descripcion", "Estado"];
pub const SAP_USER_HEADERS: [&str; 3] = ["Usuario", "Cedula asociada", "Estado"];
pub const APP_USER_HEADERS: [&str; 5] = ["ID", "Usuario", "Rol", "Ultimo ingreso", "Estado"];

pub fn employee_row(e: &Employee) -> Vec<String> {
    vec![
        e.cedula.clone(),
        e.name.clone(),
        status_label(e.active).to_string(),
    ]
}

pub fn radio_row(r: &Radio) -> Vec<String> {
    vec![
        r.code.clone(),
        r.description_or_dash().to_string(),
        status_label(r.active).to_string(),
    ]
}

pub fn sap_user_row(u: &SapUser) -> Vec<String> {
    vec![
        u.username.clone(),
        u.cedula_or_dash().to_string(),
        status_label(u.active).to_string(),
    ]
}

pub fn app_user_row(u: &AppUser, date_format: &str) -> Vec<String> {
    vec![
        u.id.to_string(),
        u.username.clone(),
        u.role().to_string(),
        format_timestamp(u.last_login.as_deref().unwrap_or(""), date_format),
        status_label(u.is_active).to_string(),
    ]
}

/// Format a page of employees
pub fn format_employee_list(items: &[&Employee], paginator: &Paginator) -> String {
    if items.is_empty() {
        return "Sin empleados.".to_string();
    }
    let rows: Vec<Vec<String>> = items.iter().map(|e| employee_row(e)).collect();
    with_footer(format_table(&EMPLOYEE_HEADERS, &rows), paginator)
}

/// Format a page of radios
pub fn format_radio_list(items: &[&Radio], paginator: &Paginator) -> String {
    if items.is_empty() {
        return "Sin radios.".to_string();
    }
    let rows: Vec<Vec<String>> = items.iter().map(|r| radio_row(r)).collect();
    with_footer(format_table(&RADIO_HEADERS, &rows), paginator)
}

/// Format a page of SAP users
pub fn format_sap_user_list(items: &[&SapUser], paginator: &Paginator) -> String {
    if items.is_empty() {
        return "Sin usuarios SAP.".to_string();
    }
    let rows: Vec<Vec<String>> = items.iter().map(|u| sap_user_row(u)).collect();
    with_footer(format_table(&SAP_USER_HEADERS, &rows), paginator)
}

/// Format a page of system users
pub fn format_app_user_list(items: &[&AppUser], paginator: &Paginator, date_format: &str) -> String {
    if items.is_empty() {
        return "Sin usuarios.".to_string();
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|u| app_user_row(u, date_format))
        .collect();
    with_footer(format_table(&APP_USER_HEADERS, &rows), paginator)
}

fn with_footer(mut table: String, paginator: &Paginator) -> String {
    table.push_str(&format!("\n{} registros", paginator.total_items()));
    let bar = format_page_bar(&paginator.buttons(), paginator.page());
    if !bar.is_empty() {
        table.push_str(&format!("  |  Pagina {}/{}  {}", paginator.page(), paginator.total_pages(), bar));
    }
    table
}

/// Page buttons as text, current page in brackets: `1 … 4 [5] 6 … 10`
pub fn format_page_bar(buttons: &[PageButton], current: usize) -> String {
    buttons
        .iter()
        .map(|button| match button {
            PageButton::Page(n) if *n == current => format!("[{}]", n),
            PageButton::Page(n) => n.to_string(),
            PageButton::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::page_buttons;

    #[test]
    fn test_page_bar() {
        assert_eq!(format_page_bar(&page_buttons(5, 10), 5), "1 … 4 [5] 6 … 10");
        assert_eq!(format_page_bar(&page_buttons(1, 1), 1), "");
    }

    #[test]
    fn test_employee_table() {
        let employees = vec![Employee {
            id: None,
            cedula: "1020".into(),
            name: "Ana".into(),
            active: false,
        }];
        let refs: Vec<&Employee> = employees.iter().collect();
        let mut paginator = Paginator::default();
        paginator.set_total_items(1);

        let text = format_employee_list(&refs, &paginator);
        assert!(text.starts_with("Cedula  Nombre  Estado"));
        assert!(text.contains("1020    Ana     Inactivo"));
        assert!(text.ends_with("1 registros"));
    }

    #[test]
    fn test_empty_lists() {
        let paginator = Paginator::default();
        assert_eq!(format_radio_list(&[], &paginator), "Sin radios.");
        assert_eq!(format_sap_user_list(&[], &paginator), "Sin usuarios SAP.");
    }
}
