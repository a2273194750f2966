//! In-memory search

/// A record that can be matched against the search box
pub trait Searchable {
    /// Fields the search box looks into
    fn search_fields(&self) -> Vec<&str>;

    /// Whether any field contains `needle`; `needle` must already be lowercase
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Items whose fields contain `filter`, case-insensitively
///
/// A blank filter keeps everything.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}
