//! Paginated list shape returned by the external API.

use serde::{Deserialize, Serialize};

/// One page of an entity list as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Total number of pages (1-based).
    #[serde(default = "default_last_page")]
    pub last_page: u32,
}

fn default_last_page() -> u32 {
    1
}

impl<T> Page<T> {
    /// Creates a page, clamping `last_page` to at least 1.
    #[must_use]
    pub fn new(data: Vec<T>, last_page: u32) -> Self {
        Self {
            data,
            last_page: last_page.max(1),
        }
    }

    /// Number of items in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if this page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            last_page: 1,
        }
    }
}
