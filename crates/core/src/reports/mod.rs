//! Report aggregation engine.
//!
//! This module provides pure business logic for turning flat sequences of
//! inventory and expense rows into grouped report views:
//! - Sold vs. available partitioning (sale-linkage rule)
//! - Per-group subtotals and grand totals
//! - Monthly expense buckets
//! - NaN-free generic summation over loosely typed fields

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;
