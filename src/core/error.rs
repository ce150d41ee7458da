//! Error types.
//!
//! Only two things can fail in this crate: starting a round with a bad
//! configuration, and talking to an external collaborator. Invalid taps are
//! not errors; see `TapOutcome`.

use thiserror::Error;

use super::config::GameMode;

/// Why a round configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("pair count {requested} is outside {min}..={max}")]
    PairCountOutOfRange { requested: u8, min: u8, max: u8 },

    #[error("{mode} mode needs {expected} player(s), got {actual}")]
    PlayerCountMismatch {
        mode: GameMode,
        expected: &'static str,
        actual: usize,
    },

    #[error("player {index} has an empty name")]
    EmptyPlayerName { index: usize },

    /// The roster is already full.
    #[error("at most {max} players are supported")]
    TooManyPlayers { max: usize },

    /// The roster is already at its minimum.
    #[error("at least {min} players are required")]
    TooFewPlayers { min: usize },
}

/// Errors returned by the engine API.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("invalid settings: {0}")]
    Settings(String),
}

impl From<toml::de::Error> for GameError {
    fn from(err: toml::de::Error) -> Self {
        GameError::Settings(err.to_string())
    }
}

/// Failures from the preference store or the analytics sink.
///
/// These never reach game state; the session logs and drops them.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}
