//! Facade error: every engine error flattened into one taxonomy.

use kaal_core::EphemerisError;
use kaal_festival::FestivalError;
use kaal_muhurta::MuhurtaError;
use kaal_panchang::PanchangError;
use kaal_time::TimeError;
use kaal_vedic_base::VedicError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum KaalError {
    /// Out-of-range coordinate or date, empty or inverted range, size cap.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Unknown ayanamsha system or event type.
    #[error("unsupported: {0}")]
    UnsupportedSystem(String),
    /// Provider failure or date outside its coverage.
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(String),
    /// No sunrise or sunset at this latitude and date, or a search that
    /// failed to converge.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
    #[error("festival '{name}' has no date in {year}")]
    ResolutionAmbiguous { name: String, year: i32 },
    /// Configuration file missing, unreadable, malformed or invalid.
    #[error("config error: {0}")]
    Config(String),
}

impl From<EphemerisError> for KaalError {
    fn from(e: EphemerisError) -> Self {
        Self::EphemerisUnavailable(e.to_string())
    }
}

impl From<TimeError> for KaalError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<VedicError> for KaalError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::InvalidInput(msg) => Self::InvalidInput(msg),
            VedicError::UnsupportedSystem(msg) => Self::UnsupportedSystem(msg),
            VedicError::DegenerateGeometry(msg) => Self::DegenerateGeometry(msg.to_string()),
            VedicError::Ephemeris(e) => e.into(),
            VedicError::Time(e) => e.into(),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<PanchangError> for KaalError {
    fn from(e: PanchangError) -> Self {
        match e {
            PanchangError::Ephemeris(e) => e.into(),
            PanchangError::Vedic(e) => e.into(),
            PanchangError::Time(e) => e.into(),
            PanchangError::NoConvergence(what) => Self::DegenerateGeometry(what.to_string()),
            PanchangError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<MuhurtaError> for KaalError {
    fn from(e: MuhurtaError) -> Self {
        match e {
            MuhurtaError::Panchang(e) => e.into(),
            MuhurtaError::Time(e) => e.into(),
            MuhurtaError::InvalidInput(msg) => Self::InvalidInput(msg),
            MuhurtaError::UnsupportedEventType(t) => {
                Self::UnsupportedSystem(format!("muhurta type '{t}'"))
            }
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<FestivalError> for KaalError {
    fn from(e: FestivalError) -> Self {
        match e {
            FestivalError::Panchang(e) => e.into(),
            FestivalError::Time(e) => e.into(),
            FestivalError::InvalidInput(msg) => Self::InvalidInput(msg),
            FestivalError::ResolutionAmbiguous { name, year } => Self::ResolutionAmbiguous {
                name: name.to_string(),
                year,
            },
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<serde_yaml::Error> for KaalError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaal_core::Body;

    #[test]
    fn coverage_failures_surface_as_unavailable() {
        let e: KaalError = PanchangError::Ephemeris(EphemerisError::OutOfRange {
            body: Body::Moon,
            jd_tt: 0.0,
        })
        .into();
        assert!(matches!(e, KaalError::EphemerisUnavailable(_)));
    }

    #[test]
    fn polar_night_is_degenerate() {
        let e: KaalError = MuhurtaError::Panchang(PanchangError::Vedic(
            VedicError::DegenerateGeometry("sun never rises (polar night)"),
        ))
        .into();
        assert_eq!(
            e,
            KaalError::DegenerateGeometry("sun never rises (polar night)".into())
        );
    }

    #[test]
    fn unknown_event_type_is_unsupported() {
        let e: KaalError = MuhurtaError::UnsupportedEventType("naming".into()).into();
        assert!(matches!(e, KaalError::UnsupportedSystem(_)));
    }

    #[test]
    fn ambiguity_keeps_name_and_year() {
        let e: KaalError = FestivalError::ResolutionAmbiguous {
            name: "Onam",
            year: 2030,
        }
        .into();
        assert_eq!(
            e,
            KaalError::ResolutionAmbiguous {
                name: "Onam".into(),
                year: 2030
            }
        );
    }
}
