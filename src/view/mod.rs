//! View state shared by the CLI and the TUI
//!
//! - `filter`: case-insensitive substring search over designated fields
//! - `pagination`: fixed-size pages and the page-button bar
//! - `list`: per-catalog list state (items, filter, page, selection, busy)

pub mod filter;
pub mod list;
pub mod pagination;

pub use filter::{filter_items, Searchable};
pub use list::CatalogState;
pub use pagination::{page_buttons, total_pages, PageButton, Paginator, ITEMS_PER_PAGE};
