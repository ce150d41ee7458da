//! What the computer remembers about the board.
//!
//! A map from symbol to the card ids seen showing that symbol. There are only
//! two cards per symbol, so each entry fits inline in a `SmallVec`.
//!
//! Memory never decides what gets remembered; `ComputerPolicy` rolls the
//! retention dice and only calls `remember` for sightings that stick.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{CardId, SymbolIndex};

/// Remembered card sightings, keyed by symbol.
#[derive(Clone, Debug, Default)]
pub struct CardMemory {
    seen: FxHashMap<SymbolIndex, SmallVec<[CardId; 2]>>,
}

impl CardMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `card` shows `symbol`. Repeat sightings are no-ops.
    pub fn remember(&mut self, card: CardId, symbol: SymbolIndex) {
        let ids = self.seen.entry(symbol).or_default();
        if !ids.contains(&card) {
            ids.push(card);
        }
    }

    /// Drop a symbol whose pair has been claimed.
    pub fn forget_symbol(&mut self, symbol: SymbolIndex) {
        self.seen.remove(&symbol);
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }

    /// Remembered cards for a symbol.
    #[must_use]
    pub fn remembered(&self, symbol: SymbolIndex) -> &[CardId] {
        self.seen
            .get(&symbol)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Total remembered sightings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.values().map(SmallVec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.values().all(SmallVec::is_empty)
    }

    /// A symbol with two remembered cards that are both still in play.
    ///
    /// When several qualify the lowest symbol wins, so choices do not
    /// depend on hash order.
    #[must_use]
    pub fn known_pair(&self, in_play: impl Fn(CardId) -> bool) -> Option<(CardId, CardId)> {
        self.seen
            .iter()
            .filter_map(|(&symbol, ids)| {
                let mut live = ids.iter().copied().filter(|&id| in_play(id));
                Some((symbol, live.next()?, live.next()?))
            })
            .min_by_key(|&(symbol, _, _)| symbol)
            .map(|(_, a, b)| (a, b))
    }

    /// Another remembered, in-play card with the same symbol as `card`.
    #[must_use]
    pub fn partner_of(
        &self,
        card: CardId,
        symbol: SymbolIndex,
        in_play: impl Fn(CardId) -> bool,
    ) -> Option<CardId> {
        self.remembered(symbol)
            .iter()
            .copied()
            .find(|&id| id != card && in_play(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> CardId {
        CardId::new(n)
    }

    fn sym(n: u8) -> SymbolIndex {
        SymbolIndex::new(n)
    }

    #[test]
    fn test_remember_dedupes() {
        let mut memory = CardMemory::new();
        memory.remember(id(1), sym(0));
        memory.remember(id(1), sym(0));
        assert_eq!(memory.remembered(sym(0)), &[id(1)]);
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_known_pair_needs_two() {
        let mut memory = CardMemory::new();
        memory.remember(id(4), sym(2));
        assert_eq!(memory.known_pair(|_| true), None);

        memory.remember(id(5), sym(2));
        assert_eq!(memory.known_pair(|_| true), Some((id(4), id(5))));
    }

    #[test]
    fn test_known_pair_skips_cards_out_of_play() {
        let mut memory = CardMemory::new();
        memory.remember(id(4), sym(2));
        memory.remember(id(5), sym(2));
        assert_eq!(memory.known_pair(|card| card != id(5)), None);
    }

    #[test]
    fn test_known_pair_prefers_lowest_symbol() {
        let mut memory = CardMemory::new();
        for (card, symbol) in [(10, 7), (11, 7), (2, 1), (3, 1), (6, 3)] {
            memory.remember(id(card), sym(symbol));
        }
        assert_eq!(memory.known_pair(|_| true), Some((id(2), id(3))));
    }

    #[test]
    fn test_partner_of() {
        let mut memory = CardMemory::new();
        memory.remember(id(8), sym(4));
        assert_eq!(memory.partner_of(id(8), sym(4), |_| true), None);

        memory.remember(id(9), sym(4));
        assert_eq!(memory.partner_of(id(8), sym(4), |_| true), Some(id(9)));
        assert_eq!(memory.partner_of(id(9), sym(4), |_| true), Some(id(8)));
    }

    #[test]
    fn test_forget_symbol() {
        let mut memory = CardMemory::new();
        memory.remember(id(0), sym(0));
        memory.remember(id(1), sym(0));
        memory.remember(id(2), sym(1));

        memory.forget_symbol(sym(0));
        assert!(memory.remembered(sym(0)).is_empty());
        assert_eq!(memory.len(), 1);

        memory.clear();
        assert!(memory.is_empty());
    }
}
