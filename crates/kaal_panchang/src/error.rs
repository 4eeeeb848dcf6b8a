//! Error types for panchang computation and event search.

use kaal_core::EphemerisError;
use kaal_time::TimeError;
use kaal_vedic_base::VedicError;
use thiserror::Error;

/// Errors from snapshot building and boundary searches.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PanchangError {
    /// Ephemeris query failed.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// Rise/set or classification failure.
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// Time conversion failed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// A boundary search ran out of steps without bracketing a crossing.
    #[error("search did not converge: {0}")]
    NoConvergence(&'static str),
    /// Caller-supplied parameter rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
