//! The nine grahas: seven bodies plus the two lunar nodes.

use kaal_core::Body;
use serde::Serialize;

/// Navagraha in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Graha {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
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
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangala",
            Self::Mercury => "Budha",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Ephemeris body, `None` for the computed nodes.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Sun => Some(Body::Sun),
            Self::Moon => Some(Body::Moon),
            Self::Mars => Some(Body::Mars),
            Self::Mercury => Some(Body::Mercury),
            Self::Jupiter => Some(Body::Jupiter),
            Self::Venus => Some(Body::Venus),
            Self::Saturn => Some(Body::Saturn),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// Vimshottari mahadasha length in years.
    pub const fn vimshottari_years(self) -> f64 {
        match self {
            Self::Ketu => 7.0,
            Self::Venus => 20.0,
            Self::Sun => 6.0,
            Self::Moon => 10.0,
            Self::Mars => 7.0,
            Self::Rahu => 18.0,
            Self::Jupiter => 16.0,
            Self::Saturn => 19.0,
            Self::Mercury => 17.0,
        }
    }
}

impl From<Body> for Graha {
    fn from(body: Body) -> Self {
        match body {
            Body::Sun => Self::Sun,
            Body::Moon => Self::Moon,
            Body::Mars => Self::Mars,
            Body::Mercury => Self::Mercury,
            Body::Jupiter => Self::Jupiter,
            Body::Venus => Self::Venus,
            Body::Saturn => Self::Saturn,
        }
    }
}
