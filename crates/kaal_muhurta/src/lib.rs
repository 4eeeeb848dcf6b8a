//! Muhurta (electional timing) search.
//!
//! [`MuhurtaEngine`] sweeps a time range at a fixed step, scores each
//! sample on eight weighted panchang factors, and returns the best
//! acceptable instants. Rule tables per activity live in [`rules`].

pub mod dignity;
pub mod engine;
pub mod error;
pub mod factors;
pub mod rules;
pub mod types;

pub use dignity::{Dignity, dignity};
pub use engine::{
    DEFAULT_MAX_RESULTS, DEFAULT_MAX_SWEEP_DAYS, DEFAULT_STEP_MINUTES, MuhurtaConfig,
    MuhurtaEngine,
};
pub use error::MuhurtaError;
pub use rules::{GANDA_MOOLA, Penalty, RuleSet, TravelDirection, rules_for};
pub use types::{
    ALL_MUHURTA_TYPES, CustomRules, ExcludedPeriod, FactorReport, FactorWeights, MuhurtaQuality,
    MuhurtaRequest, MuhurtaResult, MuhurtaType, Note,
};
