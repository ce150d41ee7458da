//! Round state: the board, the turn, and the pending resolution.
//!
//! ## RoundState
//!
//! Created by `GameEngine::start`, mutated only through the tap/resolve
//! protocol, and dropped (never recycled) when the next round starts. Fields
//! are crate-private; everything outside the engine reads through accessors.
//!
//! ## PendingResolution
//!
//! The delayed half of a pair attempt. Carries the round generation so a
//! timer that outlives its round can be recognised and ignored.
//!
//! ## RoundSnapshot
//!
//! A cheap, owned copy of what a renderer needs. Cards live in an `im`
//! vector, so snapshotting shares structure with the live round.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId};
use super::config::GameMode;
use super::player::{Player, PlayerId};
use super::theme::Theme;

/// Cards currently face-up and unresolved. Never more than two.
pub type FlippedCards = SmallVec<[CardId; 2]>;

/// A pair attempt waiting for its visual pause to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingResolution {
    /// Round this resolution belongs to.
    pub generation: u64,

    /// First card flipped.
    pub first: CardId,

    /// Second card flipped.
    pub second: CardId,

    /// Engine clock time at which it fires.
    pub due_at_ms: u64,
}

/// Live state of one round.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub(crate) generation: u64,
    pub(crate) mode: GameMode,
    pub(crate) theme: Theme,
    pub(crate) num_pairs: u8,
    pub(crate) cards: Vector<Card>,
    pub(crate) positions: FxHashMap<CardId, usize>,
    pub(crate) current_player: PlayerId,
    pub(crate) player_count: usize,
    pub(crate) flipped: FlippedCards,
    pub(crate) consecutive_matches: u8,
    pub(crate) attempts: u32,
    pub(crate) matched_pairs: u8,
    pub(crate) is_over: bool,
    pub(crate) pending: Option<PendingResolution>,
    pub(crate) started_at_ms: u64,
}

impl RoundState {
    /// Lay out an already-shuffled deck.
    pub(crate) fn new(
        generation: u64,
        mode: GameMode,
        theme: Theme,
        num_pairs: u8,
        cards: Vec<Card>,
        player_count: usize,
        started_at_ms: u64,
    ) -> Self {
        let positions = cards
            .iter()
            .enumerate()
            .map(|(position, card)| (card.id, position))
            .collect();

        Self {
            generation,
            mode,
            theme,
            num_pairs,
            cards: cards.into_iter().collect(),
            positions,
            current_player: PlayerId::new(0),
            player_count,
            flipped: FlippedCards::new(),
            consecutive_matches: 0,
            attempts: 0,
            matched_pairs: 0,
            is_over: false,
            pending: None,
            started_at_ms,
        }
    }

    /// Round generation; bumps on every start and end.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn num_pairs(&self) -> u8 {
        self.num_pairs
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Look a card up by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.positions.get(&id).and_then(|&pos| self.cards.get(pos))
    }

    /// Board position of a card.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let pos = *self.positions.get(&id)?;
        self.cards.get_mut(pos)
    }

    /// Cards a player could tap right now, ignoring turn and pending state.
    pub fn available_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_available())
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Cards face-up and awaiting resolution.
    #[must_use]
    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    /// Matches by the current player since the turn last rotated.
    #[must_use]
    pub fn consecutive_matches(&self) -> u8 {
        self.consecutive_matches
    }

    /// Resolved pair attempts this round, hits and misses alike.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u8 {
        self.matched_pairs
    }

    /// All pairs found.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// The pair attempt waiting on its delay, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PendingResolution> {
        self.pending
    }

    /// Engine clock time the round was dealt.
    #[must_use]
    pub fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }
}

/// Owned, read-only view of a round for renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub generation: u64,
    pub mode: GameMode,
    pub theme: Theme,
    pub cards: Vector<Card>,
    pub players: Vec<Player>,
    pub current_player: PlayerId,
    pub flipped: FlippedCards,
    pub consecutive_matches: u8,
    pub attempts: u32,
    pub is_over: bool,
    pub resolution_pending: bool,
}

impl RoundSnapshot {
    pub(crate) fn capture(round: &RoundState, players: &[Player]) -> Self {
        Self {
            generation: round.generation,
            mode: round.mode,
            theme: round.theme,
            cards: round.cards.clone(),
            players: players.to_vec(),
            current_player: round.current_player,
            flipped: round.flipped.clone(),
            consecutive_matches: round.consecutive_matches,
            attempts: round.attempts,
            is_over: round.is_over,
            resolution_pending: round.pending.is_some(),
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<&Player> {
        self.players.get(self.current_player.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::build_deck;

    fn round(num_pairs: u8) -> RoundState {
        RoundState::new(
            1,
            GameMode::Multiplayer,
            Theme::Fantasy,
            num_pairs,
            build_deck(num_pairs),
            2,
            0,
        )
    }

    #[test]
    fn test_new_round_defaults() {
        let state = round(3);
        assert_eq!(state.cards().len(), 6);
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert!(state.flipped().is_empty());
        assert_eq!(state.consecutive_matches(), 0);
        assert!(!state.is_over());
        assert!(state.pending().is_none());
        assert_eq!(state.available_cards().count(), 6);
    }

    #[test]
    fn test_card_lookup_by_id() {
        let state = round(2);
        for (pos, card) in state.cards().iter().enumerate() {
            assert_eq!(state.position_of(card.id), Some(pos));
            assert_eq!(state.card(card.id), Some(card));
        }
        assert!(state.card(CardId::new(99)).is_none());
    }

    #[test]
    fn test_card_mut_updates_board() {
        let mut state = round(2);
        let id = CardId::new(1);
        if let Some(card) = state.card_mut(id) {
            card.is_flipped = true;
        }
        assert!(state.card(id).is_some_and(|c| c.is_flipped));
        assert_eq!(state.available_cards().count(), 3);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = round(2);
        let players = vec![Player::new("A"), Player::new("B")];
        let snapshot = RoundSnapshot::capture(&state, &players);

        if let Some(card) = state.card_mut(CardId::new(0)) {
            card.is_matched = true;
        }

        assert!(snapshot.cards.iter().all(|c| !c.is_matched));
        assert_eq!(snapshot.current().map(|p| p.name.as_str()), Some("A"));
    }
}
