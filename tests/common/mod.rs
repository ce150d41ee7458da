//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use memory_match::core::{CardId, RoundState, SymbolIndex};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Both card ids showing `symbol`.
pub fn pair_of(round: &RoundState, symbol: u8) -> (CardId, CardId) {
    let ids: Vec<_> = round
        .cards()
        .iter()
        .filter(|c| c.symbol == SymbolIndex::new(symbol))
        .map(|c| c.id)
        .collect();
    assert_eq!(ids.len(), 2, "symbol {} should be on the board twice", symbol);
    (ids[0], ids[1])
}

/// Two face-down cards with different symbols.
pub fn mismatch(round: &RoundState) -> (CardId, CardId) {
    let available: Vec<_> = round.available_cards().collect();
    let first = available[0];
    let second = available
        .iter()
        .find(|c| c.symbol != first.symbol)
        .expect("board has at least two symbols in play");
    (first.id, second.id)
}
