//! Latest-wins list state.
//!
//! The transport layer fetches pages asynchronously; responses can arrive out
//! of order when the user pages or filters faster than the network. The
//! protocol here makes the race harmless: every state transition mints a
//! ticket carrying a sequence number and a snapshot of the query, and a
//! response is committed only while its ticket is still the newest one.
//! Superseded responses are discarded silently; cancellation is implicit.

use dealerdesk_shared::error::AppError;
use dealerdesk_shared::types::Page;

use super::types::ListQuery;

/// A fetch authorization minted by [`ListState`].
///
/// Carries the query to dispatch and the sequence number that decides whether
/// the eventual response is still wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    query: ListQuery,
}

impl FetchTicket {
    /// The query snapshot to dispatch for this ticket.
    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }
}

/// Outcome of committing a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The response matched the newest ticket and was applied.
    Applied,
    /// The response was superseded by a newer state change and discarded.
    Stale,
}

/// View state for one paginated entity list.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    query: ListQuery,
    seq: u64,
    rows: Vec<T>,
    last_page: u32,
    last_error: Option<AppError>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListState<T> {
    /// Creates an empty list positioned on page 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: ListQuery::new(1),
            seq: 0,
            rows: Vec::new(),
            last_page: 1,
            last_error: None,
        }
    }

    /// Moves to `page` and mints a ticket for the re-fetch.
    pub fn set_page(&mut self, page: u32) -> FetchTicket {
        self.query.set_page(page);
        self.mint()
    }

    /// Sets (or clears, for an empty value) a filter and mints a ticket.
    ///
    /// A filter change resets the list to page 1: the old page number is
    /// meaningless against a different result set.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) -> FetchTicket {
        self.query.filters_mut().set(key, value);
        self.query.set_page(1);
        self.mint()
    }

    /// Mints a ticket to re-fetch the current state unchanged.
    pub fn refresh(&mut self) -> FetchTicket {
        self.mint()
    }

    /// Commits a fetch outcome.
    ///
    /// A stale ticket (one superseded by a later `set_page`/`set_filter`/
    /// `refresh`) is discarded without touching the view. For the live
    /// ticket, a successful page replaces the rows and clears the error; a
    /// failure keeps the previously rendered rows intact and records the
    /// error for the caller to surface.
    pub fn commit(&mut self, ticket: &FetchTicket, outcome: Result<Page<T>, AppError>) -> Commit {
        if ticket.seq != self.seq {
            return Commit::Stale;
        }
        match outcome {
            Ok(page) => {
                self.rows = page.data;
                self.last_page = page.last_page.max(1);
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(err);
            }
        }
        Commit::Applied
    }

    /// The currently rendered rows.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// The current query (page + filters).
    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.query.page()
    }

    /// Total pages as last reported by the API.
    #[must_use]
    pub const fn last_page(&self) -> u32 {
        self.last_page
    }

    /// The error from the most recent live fetch, if it failed.
    #[must_use]
    pub const fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    fn mint(&mut self) -> FetchTicket {
        self.seq += 1;
        FetchTicket {
            seq: self.seq,
            query: self.query.clone(),
        }
    }
}
