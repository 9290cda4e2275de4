//! List query construction.

use std::collections::BTreeMap;

/// Independent, combinable filters for one entity list.
///
/// Backed by an ordered map so outgoing query strings are stable. Setting a
/// filter to an empty value removes it; empty values are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters(BTreeMap<String, String>);

impl ListFilters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter value. An empty (or whitespace-only) value clears the
    /// filter instead, so it is omitted from the outgoing request.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, value);
        }
    }

    /// Removes a filter.
    pub fn clear(&mut self, key: &str) {
        self.0.remove(key);
    }

    /// Returns the current value of a filter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true when no filters are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Active filters as query parameters, in key order.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// One paginated query: a 1-based page plus the active filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    page: u32,
    filters: ListFilters,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ListQuery {
    /// Creates a query for `page`, clamped to at least 1.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(1),
            filters: ListFilters::new(),
        }
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Moves to `page`, clamped to at least 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Current filters.
    #[must_use]
    pub const fn filters(&self) -> &ListFilters {
        &self.filters
    }

    /// Mutable access to the filters.
    pub const fn filters_mut(&mut self) -> &mut ListFilters {
        &mut self.filters
    }

    /// Full request parameters: `page` first, then active filters. Filters
    /// with empty values never appear.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("page".to_string(), self.page.to_string())];
        params.extend(self.filters.to_params());
        params
    }
}
