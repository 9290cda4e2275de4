//! HTTP adapter for the external back-office API.
//!
//! This crate owns everything that touches the network:
//! - `transport` - the HTTP seam (trait + reqwest implementation)
//! - `reports` - the report fetch adapter feeding the aggregation engine
//! - `listing` - the paginated list controller driving `ListState`
//!
//! Write operations (create/update/delete) are plain request/response calls
//! made elsewhere; this crate only consumes their resulting refreshed lists.

pub mod listing;
pub mod reports;
pub mod transport;

pub use listing::ListController;
pub use reports::{ReportApi, ReportView};
pub use transport::{HttpTransport, Transport};
