//! Round configuration and engine settings.
//!
//! - `RoundConfig`: what `GameEngine::start` accepts (mode, pair count,
//!   player names, theme). Validated on every start.
//! - `EngineSettings`: process-level tuning (visual delays, RNG seed).
//!   Loadable from TOML.
//! - `Difficulty`: the computer opponent's recall level.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{ConfigError, GameError};
use super::player::{Player, COMPUTER_NAME};
use super::theme::{Theme, GLYPHS_PER_THEME};

/// Fewest pairs a round may use.
pub const MIN_PAIRS: u8 = 2;

/// Most pairs a round may use. Every theme has a glyph per pair.
pub const MAX_PAIRS: u8 = GLYPHS_PER_THEME as u8;

/// Fewest players in multiplayer mode.
pub const MIN_MULTIPLAYER: usize = 2;

/// Most players in any mode.
pub const MAX_PLAYERS: usize = 5;

/// Consecutive matches after which the turn passes anyway.
pub const MAX_CONSECUTIVE_MATCHES: u8 = 3;

/// Computer opponent recall level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Never remembers a sighting.
    Easy,
    /// Remembers each sighting with even odds.
    #[default]
    Medium,
    /// Remembers everything it sees.
    Hard,
}

impl Difficulty {
    /// Probability that a single card sighting is retained.
    #[must_use]
    pub const fn retention_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.0,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 1.0,
        }
    }
}

/// How players take part in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GameMode {
    /// 2-5 humans taking turns.
    Multiplayer,
    /// One human; turns never rotate.
    Solo,
    /// One human against the computer in seat 1.
    VsComputer { difficulty: Difficulty },
}

impl GameMode {
    /// Whether this mode seats the computer opponent.
    #[must_use]
    pub const fn has_computer(self) -> bool {
        matches!(self, GameMode::VsComputer { .. })
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Multiplayer => f.write_str("multiplayer"),
            GameMode::Solo => f.write_str("solo"),
            GameMode::VsComputer { .. } => f.write_str("vs-computer"),
        }
    }
}

/// Everything `start` needs to deal a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Turn structure.
    pub mode: GameMode,

    /// Pairs on the board.
    pub num_pairs: u8,

    /// Player names in seat order.
    pub players: Vec<String>,

    /// Card faces. Display only.
    #[serde(default)]
    pub theme: Theme,
}

impl RoundConfig {
    /// Multiplayer round for the given names.
    pub fn multiplayer<S: Into<String>>(names: impl IntoIterator<Item = S>, num_pairs: u8) -> Self {
        Self {
            mode: GameMode::Multiplayer,
            num_pairs,
            players: names.into_iter().map(Into::into).collect(),
            theme: Theme::default(),
        }
    }

    /// Single-player round.
    pub fn solo(name: impl Into<String>, num_pairs: u8) -> Self {
        Self {
            mode: GameMode::Solo,
            num_pairs,
            players: vec![name.into()],
            theme: Theme::default(),
        }
    }

    /// One human against the computer.
    pub fn vs_computer(name: impl Into<String>, difficulty: Difficulty, num_pairs: u8) -> Self {
        Self {
            mode: GameMode::VsComputer { difficulty },
            num_pairs,
            players: vec![name.into(), COMPUTER_NAME.to_string()],
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Check pair count, player count for the mode, and names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PAIRS..=MAX_PAIRS).contains(&self.num_pairs) {
            return Err(ConfigError::PairCountOutOfRange {
                requested: self.num_pairs,
                min: MIN_PAIRS,
                max: MAX_PAIRS,
            });
        }

        let count = self.players.len();
        let expected = match self.mode {
            GameMode::Multiplayer if !(MIN_MULTIPLAYER..=MAX_PLAYERS).contains(&count) => {
                Some("2 to 5")
            }
            GameMode::Solo if count != 1 => Some("exactly 1"),
            GameMode::VsComputer { .. } if count != 2 => Some("exactly 2"),
            _ => None,
        };
        if let Some(expected) = expected {
            return Err(ConfigError::PlayerCountMismatch {
                mode: self.mode,
                expected,
                actual: count,
            });
        }

        // Seat 1 in vs-computer mode is always the computer, whatever it is named.
        let human_seats = if self.mode.has_computer() { 1 } else { count };
        if let Some(index) = self.players[..human_seats]
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(ConfigError::EmptyPlayerName { index });
        }

        Ok(())
    }

    /// Build fresh player records in seat order.
    ///
    /// Call only after `validate` succeeds.
    #[must_use]
    pub fn build_players(&self) -> Vec<Player> {
        self.players
            .iter()
            .enumerate()
            .map(|(seat, name)| {
                if self.mode.has_computer() && seat == 1 {
                    Player::computer()
                } else {
                    Player::new(name.trim())
                }
            })
            .collect()
    }
}

/// Engine tuning that is not part of a round's rules.
///
/// ```
/// use memory_match::core::EngineSettings;
///
/// let settings = EngineSettings::from_toml_str("resolve_delay_ms = 250\nseed = 9").unwrap();
/// assert_eq!(settings.resolve_delay_ms, 250);
/// assert_eq!(settings.think_delay_ms, 700);
/// assert_eq!(settings.seed, Some(9));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Pause between the second flip and its resolution.
    pub resolve_delay_ms: u64,

    /// Pause before each of the computer's reveals.
    pub think_delay_ms: u64,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            resolve_delay_ms: 1000,
            think_delay_ms: 700,
            seed: None,
        }
    }
}

impl EngineSettings {
    /// Parse settings from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, GameError> {
        Ok(toml::from_str(source)?)
    }

    /// Zero delays and a fixed seed, for tests and simulations.
    #[must_use]
    pub fn headless(seed: u64) -> Self {
        Self {
            resolve_delay_ms: 0,
            think_delay_ms: 0,
            seed: Some(seed),
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay_ms = duration_ms(delay);
        self
    }

    /// Set the computer think delay.
    #[must_use]
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay_ms = duration_ms(delay);
        self
    }
}

/// Whole milliseconds in `duration`, clamped to `u64`.
pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
