//! Client-side pagination
//!
//! Pages are 1-based. The page-button bar shows the first and last page,
//! the current page and its neighbours, and an ellipsis for each gap.

use crate::error::{AdminError, AdminResult};

/// Rows per page in every listing
pub const ITEMS_PER_PAGE: usize = 8;

/// Number of pages for `count` items; never less than one
pub fn total_pages(count: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    count.div_ceil(per_page).max(1)
}

/// One slot of the page-button bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// Button bar for `page` out of `total`; empty when there is a single page
pub fn page_buttons(page: usize, total: usize) -> Vec<PageButton> {
    if total <= 1 {
        return Vec::new();
    }

    let mut buttons = Vec::new();
    for i in 1..=total {
        if i == 1 || i == total || i.abs_diff(page) <= 1 {
            buttons.push(PageButton::Page(i));
        } else if (i + 2 == page && page > 3) || (i == page + 2 && page + 2 < total) {
            buttons.push(PageButton::Ellipsis);
        }
    }
    buttons
}

/// Current page over a list whose length can change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    per_page: usize,
    total_items: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl Paginator {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total_items: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.per_page)
    }

    /// Record a new item count; a different count goes back to page 1
    pub fn set_total_items(&mut self, count: usize) {
        if count != self.total_items {
            self.total_items = count;
            self.page = 1;
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Jump to `page`; out-of-range pages are rejected and nothing changes
    pub fn go_to(&mut self, page: usize) -> AdminResult<()> {
        let total = self.total_pages();
        if page == 0 || page > total {
            return Err(AdminError::validation(format!(
                "Pagina {} fuera de rango (1-{}).",
                page, total
            )));
        }
        self.page = page;
        Ok(())
    }

    /// Advance one page; false when already on the last one
    pub fn next(&mut self) -> bool {
        self.go_to(self.page + 1).is_ok()
    }

    /// Go back one page; false when already on the first one
    pub fn prev(&mut self) -> bool {
        self.page > 1 && self.go_to(self.page - 1).is_ok()
    }

    /// Index range of the current page within the filtered list
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    /// The slice of `items` on the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.page - 1) * self.per_page).min(items.len());
        let end = (start + self.per_page).min(items.len());
        &items[start..end]
    }

    pub fn buttons(&self) -> Vec<PageButton> {
        page_buttons(self.page, self.total_pages())
    }
}
