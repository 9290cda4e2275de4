//! Shared types, errors, and configuration for DealerDesk.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error taxonomy
//! - Lenient decoding of transport values (string-typed decimals, loose dates)
//! - Validated date ranges and report query types
//! - The external API's paginated list shape
//! - The injected session capability
//! - Configuration management

pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use session::{SessionProvider, SessionUser};
