//! Computer opponent decision policy.
//!
//! The policy sees the board exactly as a human would: card ids, which
//! cards are face-up or claimed, and the symbols of cards that have been
//! revealed. It never reads the symbol of a face-down card.
//!
//! ## Memory
//!
//! Every reveal on the board, by either player, is a sighting. Each sighting
//! is kept with the difficulty's retention probability, rolled
//! independently. Claimed symbols are purged.
//!
//! ## Turn
//!
//! 1. Fewer than two cards in play: decline.
//! 2. A remembered pair with both cards still in play: take it.
//! 3. Otherwise reveal a uniformly random card.
//! 4. Once it is face-up, take a remembered partner if there is one,
//!    else another uniformly random card.
//!
//! The policy only chooses card ids. The session submits them as taps, so
//! scoring and resolution run exactly as they do for a human.

use tracing::{debug, trace};

use super::memory::CardMemory;
use crate::core::{Card, CardId, Difficulty, GameEvent, GameRng, RoundState, SymbolIndex};

/// The computer's opening choice for a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirstPick {
    /// Card to reveal first.
    pub card: CardId,

    /// Set when the whole pair came from memory.
    pub known_partner: Option<CardId>,
}

impl FirstPick {
    /// The pick came from memory rather than chance.
    #[must_use]
    pub fn is_known_pair(&self) -> bool {
        self.known_partner.is_some()
    }
}

/// Memory-augmented card selection for the computer seat.
#[derive(Clone, Debug)]
pub struct ComputerPolicy {
    difficulty: Difficulty,
    memory: CardMemory,
    rng: GameRng,
}

impl ComputerPolicy {
    #[must_use]
    pub fn new(difficulty: Difficulty, rng: GameRng) -> Self {
        Self {
            difficulty,
            memory: CardMemory::new(),
            rng,
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change difficulty between rounds. Memory is cleared.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.memory.clear();
    }

    #[must_use]
    pub fn memory(&self) -> &CardMemory {
        &self.memory
    }

    /// Forget everything; called when a new round is dealt.
    pub fn reset(&mut self) {
        self.memory.clear();
    }

    // === Observation ===

    /// Roll retention for one sighting. Returns whether it was kept.
    pub fn observe(&mut self, card: CardId, symbol: SymbolIndex) -> bool {
        let retained = self.rng.gen_bool(self.difficulty.retention_probability());
        trace!(card = card.raw(), symbol = symbol.0, retained, "sighting");
        if retained {
            self.memory.remember(card, symbol);
        }
        retained
    }

    /// A pair was claimed by someone; its cards are gone.
    pub fn observe_match(&mut self, symbol: SymbolIndex) {
        self.memory.forget_symbol(symbol);
    }

    /// Feed one engine event into memory.
    pub fn observe_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::RoundStarted { .. } => self.reset(),
            GameEvent::CardFlipped { card, symbol, .. } => {
                self.observe(card, symbol);
            }
            GameEvent::PairMatched { symbol, .. } => self.observe_match(symbol),
            _ => {}
        }
    }

    // === Decisions ===

    /// Choose the first card of a turn.
    ///
    /// Returns `None` (decline) if cards are already face-up or fewer than
    /// two remain in play.
    pub fn begin_turn(&mut self, round: &RoundState) -> Option<FirstPick> {
        if !round.flipped().is_empty() {
            return None;
        }

        let available: Vec<CardId> = round.available_cards().map(|c| c.id).collect();
        if available.len() < 2 {
            debug!(available = available.len(), "computer declines turn");
            return None;
        }

        let in_play = |id: CardId| round.card(id).is_some_and(Card::is_available);
        if let Some((first, second)) = self.memory.known_pair(in_play) {
            debug!(first = first.raw(), second = second.raw(), "computer recalls a pair");
            return Some(FirstPick {
                card: first,
                known_partner: Some(second),
            });
        }

        let card = *self.rng.choose(&available)?;
        debug!(card = card.raw(), "computer picks a random first card");
        Some(FirstPick {
            card,
            known_partner: None,
        })
    }

    /// Choose the second card once the first is face-up.
    ///
    /// Returns `None` if the first card is not showing or nothing else is
    /// in play.
    pub fn pick_second(&mut self, round: &RoundState, pick: &FirstPick) -> Option<CardId> {
        let first = round.card(pick.card).filter(|c| c.is_flipped)?;
        let in_play = |id: CardId| round.card(id).is_some_and(Card::is_available);

        if let Some(partner) = pick.known_partner.filter(|&id| in_play(id)) {
            return Some(partner);
        }

        if let Some(partner) = self.memory.partner_of(first.id, first.symbol, in_play) {
            debug!(card = partner.raw(), "computer recalls the partner");
            return Some(partner);
        }

        let rest: Vec<CardId> = round
            .available_cards()
            .map(|c| c.id)
            .filter(|&id| id != first.id)
            .collect();
        let card = *self.rng.choose(&rest)?;
        debug!(card = card.raw(), "computer picks a random second card");
        Some(card)
    }
}
