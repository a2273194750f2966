//! Per-catalog list state

use crate::error::AdminResult;

use super::filter::{filter_items, Searchable};
use super::pagination::Paginator;

/// Items from the last successful fetch plus what the user is looking at
#[derive(Debug, Clone)]
pub struct CatalogState<T> {
    items: Vec<T>,
    filter: String,
    paginator: Paginator,
    /// Selected row within the current page
    selected: usize,
    busy: bool,
    loaded: bool,
}

impl<T> Default for CatalogState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: String::new(),
            paginator: Paginator::default(),
            selected: 0,
            busy: false,
            loaded: false,
        }
    }
}

impl<T: Searchable> CatalogState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh fetch
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.loaded = true;
        self.sync_paginator();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Change the search text; a different text goes back to page 1
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter != self.filter {
            self.filter = filter;
            self.paginator.reset();
            self.selected = 0;
        }
        self.sync_paginator();
    }

    pub fn filtered(&self) -> Vec<&T> {
        filter_items(&self.items, &self.filter)
    }

    pub fn page_items(&self) -> Vec<&T> {
        let filtered = self.filtered();
        self.paginator.slice(&filtered).to_vec()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Jump to a page; out-of-range pages leave the state untouched
    pub fn go_to_page(&mut self, page: usize) -> AdminResult<()> {
        self.paginator.go_to(page)?;
        self.selected = 0;
        Ok(())
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.paginator.next();
        if moved {
            self.selected = 0;
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.paginator.prev();
        if moved {
            self.selected = 0;
        }
        moved
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.page_items().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.page_items().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Mark a mutation as in flight; false if one already is
    pub fn begin_mutation(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn end_mutation(&mut self) {
        self.busy = false;
    }

    fn sync_paginator(&mut self) {
        let count = self.filtered().len();
        self.paginator.set_total_items(count);
        let page_len = self.paginator.range().len();
        if self.selected >= page_len {
            self.selected = page_len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    fn employees(n: usize) -> Vec<Employee> {
        (1..=n)
            .map(|i| Employee {
                id: Some(i as i64),
                cedula: format!("{}", 1000 + i),
                name: if i % 2 == 0 { format!("Ana {}", i) } else { format!("Luis {}", i) },
                active: true,
            })
            .collect()
    }

    #[test]
    fn test_pages_over_filtered_items() {
        let mut state = CatalogState::new();
        state.replace_items(employees(17));
        assert_eq!(state.paginator().total_pages(), 3);
        assert_eq!(state.page_items().len(), 8);

        state.go_to_page(3).unwrap();
        assert_eq!(state.page_items().len(), 1);

        state.set_filter("ana");
        assert_eq!(state.paginator().page(), 1);
        assert_eq!(state.filtered().len(), 8);
        assert_eq!(state.paginator().total_pages(), 1);
    }

    #[test]
    fn test_out_of_range_page_keeps_state() {
        let mut state = CatalogState::new();
        state.replace_items(employees(17));
        state.go_to_page(2).unwrap();

        assert!(state.go_to_page(4).is_err());
        assert!(state.go_to_page(0).is_err());
        assert_eq!(state.paginator().page(), 2);
    }

    #[test]
    fn test_refetch_with_different_count_resets_page() {
        let mut state = CatalogState::new();
        state.replace_items(employees(17));
        state.go_to_page(2).unwrap();

        state.replace_items(employees(17));
        assert_eq!(state.paginator().page(), 2);

        state.replace_items(employees(16));
        assert_eq!(state.paginator().page(), 1);
    }

    #[test]
    fn test_selection_stays_on_page() {
        let mut state = CatalogState::new();
        state.replace_items(employees(3));
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_index(), 2);
        assert_eq!(state.selected_item().unwrap().cedula, "1003");

        state.replace_items(employees(1));
        assert_eq!(state.selected_index(), 0);
        state.select_prev();
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_busy_rejects_second_mutation() {
        let mut state: CatalogState<Employee> = CatalogState::new();
        assert!(state.begin_mutation());
        assert!(!state.begin_mutation());
        state.end_mutation();
        assert!(state.begin_mutation());
    }
}
