//! Game rules: the tap/resolve state machine and end-of-round results.
//!
//! `GameEngine` is framework-agnostic. Presentation layers bind to it by
//! submitting intents (`start`, `tap`, `end_round`) and reading snapshots
//! and events; none of them mutate round state directly.

#[allow(clippy::module_inception)]
pub mod engine;
pub mod ranking;
pub mod commentary;

pub use engine::{GameEngine, IgnoreReason, Resolution, TapOutcome};
pub use ranking::{medal_index, medal_ranks, rank_players, sort_by_score, winners, Medal, RankedPlayer};
pub use commentary::Performance;
