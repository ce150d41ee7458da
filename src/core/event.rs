//! Engine events.
//!
//! The engine queues an event for every observable transition. Renderers
//! drain them to drive animations and the "X's turn!" banner; the session
//! drains them to feed the computer's memory and the analytics sink.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::card::{CardId, SymbolIndex};
use super::config::GameMode;
use super::player::PlayerId;
use super::state::PendingResolution;
use super::theme::Theme;

/// Something that happened on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round was dealt.
    RoundStarted {
        generation: u64,
        num_pairs: u8,
        player_count: usize,
    },

    /// A card turned face-up.
    CardFlipped {
        player: PlayerId,
        card: CardId,
        symbol: SymbolIndex,
    },

    /// Two cards are up; resolution fires after the delay.
    ResolutionPending(PendingResolution),

    /// The pair matched and was claimed.
    PairMatched {
        player: PlayerId,
        symbol: SymbolIndex,
        cards: [CardId; 2],
    },

    /// The pair did not match and was turned back down.
    PairMissed {
        player: PlayerId,
        cards: [CardId; 2],
    },

    /// The turn passed to another seat.
    TurnRotated { from: PlayerId, to: PlayerId },

    /// Every pair has been found. Emitted once per round.
    RoundComplete(RoundSummary),
}

/// Final tallies of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub generation: u64,
    pub mode: GameMode,
    pub theme: Theme,
    pub num_pairs: u8,
    pub player_names: Vec<String>,
    pub scores: Vec<u32>,
    pub winner_names: Vec<String>,
    pub attempts: u32,
    pub duration: Duration,
}

impl RoundSummary {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }
}
