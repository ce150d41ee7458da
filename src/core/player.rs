//! Player identification and per-round player data.
//!
//! ## PlayerId
//!
//! Seat index into the round's player list, 0-based. Seat 0 always moves
//! first.
//!
//! ## Player
//!
//! Display name plus the round's score and found-symbol history. Players are
//! rebuilt at setup and reset at the start of every round; they are never
//! destroyed mid-round.

use serde::{Deserialize, Serialize};

use super::card::SymbolIndex;
use super::theme::Theme;

/// Reserved display name for the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Seat index of a player, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    ///
    /// With a single player this is always the same seat.
    ///
    /// ```
    /// use memory_match::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// assert_eq!(PlayerId::new(0).next(1), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        debug_assert!(player_count > 0, "Must have at least 1 player");
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a round with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in the current round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Display label.
    pub name: String,

    /// Pairs found this round.
    pub score: u32,

    /// Symbols claimed this round, in the order they were found.
    pub found_symbols: Vec<SymbolIndex>,

    /// Driven by the computer policy rather than taps.
    pub is_computer: bool,
}

impl Player {
    /// Create a human player with an empty round record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            found_symbols: Vec::new(),
            is_computer: false,
        }
    }

    /// Create the reserved computer player.
    #[must_use]
    pub fn computer() -> Self {
        Self {
            is_computer: true,
            ..Self::new(COMPUTER_NAME)
        }
    }

    /// Clear score and found symbols for a fresh round.
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.found_symbols.clear();
    }

    /// Record a found pair.
    pub fn claim(&mut self, symbol: SymbolIndex) {
        self.score += 1;
        self.found_symbols.push(symbol);
    }

    /// Render found symbols as glyphs from a theme.
    #[must_use]
    pub fn found_glyphs(&self, theme: Theme) -> Vec<&'static str> {
        self.found_symbols
            .iter()
            .filter_map(|&symbol| theme.glyph(symbol))
            .collect()
    }
}
