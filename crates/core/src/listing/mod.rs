//! Paginated list/filter engine.
//!
//! Every entity screen (cars, invoices, payments, expenses, accounts,
//! clients, users) is the same pattern: a 1-based page plus a set of
//! independent, combinable filters, re-fetched whenever either changes. This
//! module holds the pure half of that pattern: query construction and a
//! latest-wins state machine the transport drives with tickets.

pub mod state;
pub mod types;


pub use state::{Commit, FetchTicket, ListState};
pub use types::{ListFilters, ListQuery};
