//! Error types for muhurta search.

use kaal_panchang::PanchangError;
use kaal_time::TimeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MuhurtaError {
    /// Snapshot construction failed for a sample.
    #[error(transparent)]
    Panchang(#[from] PanchangError),
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Range, duration or weight override rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Event type name did not match any known type.
    #[error("unsupported event type: {0}")]
    UnsupportedEventType(String),
}
