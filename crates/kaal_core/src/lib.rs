//! Ephemeris provider contract and the built-in analytic provider.
//!
//! Everything above this crate asks one question: where is a body, in
//! apparent ecliptic coordinates of date, at a TT instant? The
//! [`EphemerisProvider`] trait is that question. [`AnalyticEphemeris`]
//! answers it from closed-form solar, lunar, and planetary theories so the
//! engine runs without external kernel files.

pub mod analytic;
pub mod error;
pub mod frames;
pub mod lunar;
pub mod nutation;
pub mod planets;
pub mod solar;

use serde::Serialize;

pub use analytic::{AnalyticConfig, AnalyticEphemeris};
pub use error::EphemerisError;
pub use frames::{
    angular_separation_deg, ecliptic_to_equatorial, equatorial_to_ecliptic, mean_obliquity_deg,
    true_obliquity_deg,
};
pub use nutation::{Nutation, nutation};

/// Bodies an ephemeris provider must serve.
///
/// Lunar nodes are computed points and live in `kaal_vedic_base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

/// All provider bodies in traditional graha order.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
];

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
        }
    }

    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
            Self::Mars => 499,
            Self::Mercury => 199,
            Self::Jupiter => 599,
            Self::Venus => 299,
            Self::Saturn => 699,
        }
    }

    /// Convert a NAIF-style body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            301 => Some(Self::Moon),
            499 => Some(Self::Mars),
            199 => Some(Self::Mercury),
            599 => Some(Self::Jupiter),
            299 => Some(Self::Venus),
            699 => Some(Self::Saturn),
            _ => None,
        }
    }
}

/// Where the body is observed from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Observer {
    /// Earth's centre.
    #[default]
    Geocentric,
    /// A point on the surface (geodetic latitude/east longitude in degrees,
    /// height above sea level in metres).
    Topocentric {
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
    },
}

/// Apparent ecliptic position of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipticPosition {
    /// Longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Latitude in degrees [-90, 90].
    pub latitude_deg: f64,
    /// Distance from the observer in AU.
    pub distance_au: f64,
}

/// Source of apparent body positions.
///
/// Implementations must be callable from many threads at once; the
/// muhurta sweep evaluates samples in parallel.
pub trait EphemerisProvider: Send + Sync {
    /// Apparent ecliptic longitude/latitude of `body` at `jd_tt`.
    fn apparent_position(
        &self,
        jd_tt: f64,
        body: Body,
        observer: &Observer,
    ) -> Result<EclipticPosition, EphemerisError>;

    /// Covered `(start, end)` range in JD TT, inclusive.
    fn coverage(&self) -> (f64, f64);
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn apparent_position(
        &self,
        jd_tt: f64,
        body: Body,
        observer: &Observer,
    ) -> Result<EclipticPosition, EphemerisError> {
        (**self).apparent_position(jd_tt, body, observer)
    }

    fn coverage(&self) -> (f64, f64) {
        (**self).coverage()
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for std::sync::Arc<P> {
    fn apparent_position(
        &self,
        jd_tt: f64,
        body: Body,
        observer: &Observer,
    ) -> Result<EclipticPosition, EphemerisError> {
        (**self).apparent_position(jd_tt, body, observer)
    }

    fn coverage(&self) -> (f64, f64) {
        (**self).coverage()
    }
}
