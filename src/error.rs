//! Error types for adstat
//!
//! The metrics engine itself is total over well-formed input and never
//! fails; errors only arise at the CLI boundary (argument parsing) and
//! when serializing reports.
//!
//! # Example
//!
//! ```
//! use adstat::error::{AdstatError, Result};
//!
//! fn parse_year(s: &str) -> Result<i32> {
//!     s.parse()
//!         .map_err(|_| AdstatError::InvalidArgument(format!("invalid year: {s}")))
//! }
//! ```

use thiserror::Error;

/// Main error type for adstat operations
#[derive(Error, Debug)]
pub enum AdstatError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in adstat
pub type Result<T> = std::result::Result<T, AdstatError>;
