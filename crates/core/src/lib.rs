//! Core business logic for DealerDesk.
//!
//! This crate contains pure logic with ZERO web or runtime dependencies.
//! All report aggregation, list/filter state, and formatting live here.
//!
//! # Modules
//!
//! - `reports` - Report aggregation engine (grouping, subtotals, buckets)
//! - `listing` - Paginated list/filter state with latest-wins commits
//! - `format` - Currency and date formatting for rendered views

pub mod format;
pub mod listing;
pub mod reports;
