//! Cards and symbol identifiers.
//!
//! ## Identity
//!
//! Every card in a round gets a `CardId` when the deck is built. Ids are
//! assigned *before* shuffling and stay stable for the life of the round, so
//! the presentation layer can key animations on them.
//!
//! ## Symbols
//!
//! A `SymbolIndex` names one of the round's `num_pairs` pairs. The engine
//! never interprets symbols beyond equality; themes map them to glyphs.
//!
//! ```
//! use memory_match::core::{Card, CardId, SymbolIndex};
//!
//! let card = Card::new(CardId::new(3), SymbolIndex::new(1));
//! assert!(card.is_face_down());
//! assert!(card.is_available());
//! ```

use serde::{Deserialize, Serialize};

/// Stable identifier for a card within one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which of the round's pairs a card belongs to.
///
/// Always in `[0, num_pairs)`; exactly two cards share each value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolIndex(pub u8);

impl SymbolIndex {
    /// Create a new symbol index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the index as a `usize` for table lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every symbol used by a round with `num_pairs` pairs.
    pub fn all(num_pairs: u8) -> impl Iterator<Item = SymbolIndex> {
        (0..num_pairs).map(SymbolIndex)
    }
}

impl std::fmt::Display for SymbolIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// A single card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity for this round.
    pub id: CardId,

    /// The pair this card belongs to.
    pub symbol: SymbolIndex,

    /// Face-up and awaiting resolution.
    pub is_flipped: bool,

    /// Permanently resolved as part of a found pair.
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, symbol: SymbolIndex) -> Self {
        Self {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Neither flipped nor matched: a legal tap target.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    /// Showing its back to the players.
    ///
    /// Matched cards are face-down in the flip sense; renderers show them
    /// as cleared rather than as backs.
    #[must_use]
    pub const fn is_face_down(&self) -> bool {
        !self.is_flipped
    }
}

/// Build the unshuffled deck for a round: two cards per symbol.
///
/// Card ids are dense, `0..2 * num_pairs`, with ids `2k` and `2k + 1`
/// sharing symbol `k`.
#[must_use]
pub fn build_deck(num_pairs: u8) -> Vec<Card> {
    SymbolIndex::all(num_pairs)
        .flat_map(|symbol| {
            let base = u32::from(symbol.0) * 2;
            [
                Card::new(CardId::new(base), symbol),
                Card::new(CardId::new(base + 1), symbol),
            ]
        })
        .collect()
}
