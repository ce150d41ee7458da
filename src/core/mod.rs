//! Core types: cards, players, configuration, round state, events, RNG.
//!
//! Everything here is plain data. Rules live in `engine`; the computer
//! opponent lives in `computer`.

pub mod card;
pub mod player;
pub mod theme;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;
pub mod event;

pub use card::{build_deck, Card, CardId, SymbolIndex};
pub use player::{Player, PlayerId, COMPUTER_NAME};
pub use theme::{Theme, GLYPHS_PER_THEME};
pub use rng::GameRng;
pub use config::{
    Difficulty, EngineSettings, GameMode, RoundConfig, MAX_CONSECUTIVE_MATCHES, MAX_PAIRS,
    MAX_PLAYERS, MIN_MULTIPLAYER, MIN_PAIRS,
};
pub use error::{CollaboratorError, ConfigError, GameError};
pub use state::{FlippedCards, PendingResolution, RoundSnapshot, RoundState};
pub use event::{GameEvent, RoundSummary};
