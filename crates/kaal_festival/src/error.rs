//! Error types for festival resolution and export.

use kaal_panchang::PanchangError;
use kaal_time::TimeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FestivalError {
    #[error(transparent)]
    Panchang(#[from] PanchangError),
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Year, month, date range or name rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A rule could not be bound to a date in the requested year.
    #[error("festival '{name}' has no date in {year}")]
    ResolutionAmbiguous { name: &'static str, year: i32 },
    /// Serialization of an export failed.
    #[error("export failed: {0}")]
    Export(String),
}
