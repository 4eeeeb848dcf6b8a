//! Ephemeris provider errors.

use thiserror::Error;

use crate::Body;

/// Failures a provider may report.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Provider configuration was rejected.
    #[error("invalid ephemeris configuration: {0}")]
    InvalidConfig(&'static str),
    /// Provider has no data for this body.
    #[error("body {0:?} unavailable from this provider")]
    BodyUnavailable(Body),
    /// Epoch is outside the provider's coverage.
    #[error("JD TT {jd_tt} outside coverage for {body:?}")]
    OutOfRange { body: Body, jd_tt: f64 },
    /// The epoch was NaN or infinite.
    #[error("non-finite epoch")]
    NonFinite,
}
