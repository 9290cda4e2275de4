//! Common types used across the application.

pub mod daterange;
pub mod lenient;
pub mod page;

pub use daterange::{DateRange, ReportKind, ReportQuery};
pub use page::Page;
