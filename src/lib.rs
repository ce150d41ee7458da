//! # memory-match
//!
//! A turn-based memory-matching game engine with a computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Framework-Agnostic**: The engine knows nothing about rendering.
//!    Presentation layers submit intents and read snapshots and events.
//!
//! 2. **One Mutator**: Round state changes only through `start`, `tap`,
//!    resolution and `end_round`. The computer opponent taps like a human.
//!
//! 3. **Explicit Time**: Delayed resolution is a `PendingResolution` value
//!    on a logical clock, tagged with the round generation, never a
//!    free-floating callback.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Cards live in an `im` vector, so
//!   snapshots for renderers are O(1) clones.
//!
//! - **Deterministic RNG**: Deals and computer choices draw from seedable
//!   ChaCha8 streams; a fixed seed replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Cards, players, themes, configuration, round state, events, RNG
//! - `engine`: Tap/resolve state machine, rankings, solo commentary
//! - `computer`: Memory-based computer opponent
//! - `session`: Table driver, setup roster, preference and analytics stores

pub mod core;
pub mod engine;
pub mod computer;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, SymbolIndex,
    Player, PlayerId,
    Theme, Difficulty, GameMode, RoundConfig, EngineSettings,
    GameRng,
    GameError, ConfigError, CollaboratorError,
    RoundState, RoundSnapshot, PendingResolution,
    GameEvent, RoundSummary,
};

pub use crate::engine::{
    GameEngine, TapOutcome, IgnoreReason, Resolution,
    Medal, RankedPlayer, Performance,
};

pub use crate::computer::{ComputerPolicy, CardMemory, FirstPick};

pub use crate::session::{
    Session, PlayerRoster,
    AnalyticsSink, RoundLog, AggregateStats,
    NullAnalytics, InMemoryAnalytics, JsonLinesAnalytics,
    NameStore, MemoryNameStore, JsonFileNameStore,
};
