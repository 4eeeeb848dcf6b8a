//! Error types for time construction and conversion.

use thiserror::Error;

/// Errors raised while building or converting instants.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
    /// A Julian Date was NaN or infinite.
    #[error("non-finite Julian Date")]
    NonFinite,
}
