//! Shool (inauspicious travel direction), nivas, and panchaka.

use serde::Serialize;

use crate::nakshatra::Nakshatra;
use crate::vaar::Vaar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Guardian deity of the direction.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::North => "Kubera",
            Self::East => "Indra",
            Self::South => "Yama",
            Self::West => "Varuna",
        }
    }
}

/// Monday-first.
const SHOOL: [Direction; 7] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::North,
    Direction::East,
    Direction::South,
];

const NIVAS: [&str; 6] = [
    "Ksheera Sagara",
    "Vaikuntha",
    "Ksheer Sagara",
    "Bhu Loka",
    "Patala Loka",
    "Swarga Loka",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShoolInfo {
    pub direction: Direction,
    pub deity: &'static str,
    pub favorable_direction: Direction,
    pub nivas: &'static str,
}

/// Shool for a weekday; nivas from the Moon's sidereal rashi index.
pub fn shool_nivas(vaar: Vaar, moon_rashi_index: u8) -> ShoolInfo {
    let direction = SHOOL[vaar.monday_index() as usize];
    ShoolInfo {
        direction,
        deity: direction.deity(),
        favorable_direction: direction.opposite(),
        nivas: NIVAS[((moon_rashi_index % 12) % 6) as usize],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PanchakaKind {
    Agni,
    Raja,
    Mrityu,
    Chor,
    Roga,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanchakaInfo {
    pub kind: PanchakaKind,
    pub name: &'static str,
    pub description: &'static str,
    pub favorable: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

const PANCHAKA_CYCLE: [PanchakaInfo; 5] = [
    PanchakaInfo {
        kind: PanchakaKind::Agni,
        name: "Agni Panchaka",
        description: "Fire element dominance, avoid fire-related activities",
        favorable: &["Religious ceremonies", "Spiritual practices", "Meditation"],
        avoid: &["Starting fires", "Cooking elaborate meals", "Metalwork"],
    },
    PanchakaInfo {
        kind: PanchakaKind::Raja,
        name: "Raja Panchaka",
        description: "Royal element, good for leadership activities",
        favorable: &["Government work", "Leadership roles", "Important decisions"],
        avoid: &["Submissive activities", "Following others blindly"],
    },
    PanchakaInfo {
        kind: PanchakaKind::Mrityu,
        name: "Mrityu Panchaka",
        description: "Death element, avoid new beginnings",
        favorable: &["Ending bad habits", "Completing projects", "Letting go"],
        avoid: &["New ventures", "Marriages", "Important purchases"],
    },
    PanchakaInfo {
        kind: PanchakaKind::Chor,
        name: "Chor Panchaka",
        description: "Theft element, be cautious with valuables",
        favorable: &["Security arrangements", "Vigilance", "Protective measures"],
        avoid: &["Displaying wealth", "Traveling with valuables", "Trusting strangers"],
    },
    PanchakaInfo {
        kind: PanchakaKind::Roga,
        name: "Roga Panchaka",
        description: "Disease element, focus on health",
        favorable: &["Health checkups", "Healing practices", "Medical treatments"],
        avoid: &["Unhealthy food", "Stress", "Overexertion"],
    },
];

const NO_PANCHAKA: PanchakaInfo = PanchakaInfo {
    kind: PanchakaKind::None,
    name: "No Panchaka",
    description: "Normal period, no special Panchaka restrictions",
    favorable: &["All normal activities", "General work", "Regular tasks"],
    avoid: &["None specific"],
};

/// Panchaka applies while the Moon is in Dhanishtha through Revati.
pub fn panchaka(moon_nakshatra: Nakshatra, vaar: Vaar) -> PanchakaInfo {
    let n = moon_nakshatra.number();
    if n < 23 {
        return NO_PANCHAKA;
    }
    let idx = (n - 23 + vaar.monday_index()) % 5;
    PANCHAKA_CYCLE[idx as usize]
}
