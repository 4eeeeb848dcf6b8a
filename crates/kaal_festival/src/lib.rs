//! Hindu festival calendar.
//!
//! A static table of [`FestivalRule`]s (lunar tithi, solar ingress,
//! nakshatra and computed kinds) is bound to civil dates per year by
//! [`FestivalResolver`], either from a sunrise-sampled lunisolar table or
//! from fixed stand-in dates. Results export to iCalendar, JSON and CSV.

pub mod approximate;
pub mod astronomical;
pub mod calendar;
pub mod error;
pub mod export;
pub mod resolver;
pub mod rules;
pub mod types;

pub use astronomical::{LUNAR_ECLIPSE_LIMIT_DEG, SOLAR_ECLIPSE_LIMIT_DEG};
pub use calendar::{DayInfo, YearTable, build_year_table};
pub use error::FestivalError;
pub use export::{to_csv, to_ical, to_json};
pub use resolver::{
    FestivalConfig, FestivalResolver, IST_OFFSET_MINUTES, MAX_CALENDAR_DAYS, ResolutionMode,
};
pub use rules::{FESTIVAL_RULES, matching_rules, rule_by_name};
pub use types::{
    ALL_CATEGORIES, ALL_REGIONS, EclipseKind, FestivalCategory, FestivalDate, FestivalKind,
    FestivalRule, Observance, Region, RuleKind, tithi_number,
};
