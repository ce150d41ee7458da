//! Everything around the engine: the table that runs a round against the
//! clock, the computer seat, the setup roster, and the external stores.

pub mod analytics;
pub mod prefs;
pub mod roster;
pub mod table;

pub use analytics::{
    AggregateStats, AnalyticsSink, InMemoryAnalytics, JsonLinesAnalytics, NullAnalytics, RoundLog,
};
pub use prefs::{JsonFileNameStore, MemoryNameStore, NameStore};
pub use roster::{PlayerRoster, DEFAULT_NAMES};
pub use table::{ComputerStep, ScheduledStep, Session};
