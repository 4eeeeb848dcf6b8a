//! Error types for Vedic base computations.

use kaal_core::EphemerisError;
use kaal_time::TimeError;
use thiserror::Error;

/// Errors from ayanamsha, rise/set, and classification helpers.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Coordinates, dates, or parameters outside their valid range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Unknown ayanamsha system or other enumerated identifier.
    #[error("unsupported system: {0}")]
    UnsupportedSystem(String),
    /// No rise/set solution at this latitude and date.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
    /// The ephemeris provider failed.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    /// Time conversion failed.
    #[error(transparent)]
    Time(#[from] TimeError),
}
