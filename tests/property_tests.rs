//! Invariants under arbitrary tap sequences.

use std::collections::HashSet;
use std::time::Duration;

use proptest::prelude::*;

use memory_match::core::{EngineSettings, RoundConfig, SymbolIndex};
use memory_match::engine::GameEngine;

#[derive(Clone, Debug)]
enum Step {
    Tap(usize),
    Advance(u64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0usize..64).prop_map(Step::Tap),
        1 => (0u64..1500).prop_map(Step::Advance),
    ]
}

fn config(players: usize, num_pairs: u8) -> RoundConfig {
    let names: Vec<String> = (0..players).map(|i| format!("P{}", i)).collect();
    RoundConfig::multiplayer(names, num_pairs)
}

proptest! {
    #[test]
    fn pair_invariant(seed in any::<u64>(), num_pairs in 2u8..=10) {
        let mut engine = GameEngine::new(EngineSettings::headless(seed));
        engine.start(&config(2, num_pairs)).unwrap();

        let round = engine.round().unwrap();
        prop_assert_eq!(round.cards().len(), 2 * num_pairs as usize);
        for symbol in SymbolIndex::all(num_pairs) {
            prop_assert_eq!(round.cards().iter().filter(|c| c.symbol == symbol).count(), 2);
        }
        let ids: HashSet<_> = round.cards().iter().map(|c| c.id).collect();
        prop_assert_eq!(ids.len(), round.cards().len());
    }

    #[test]
    fn tap_sequences_keep_invariants(
        seed in any::<u64>(),
        players in 2usize..=5,
        num_pairs in 2u8..=6,
        steps in prop::collection::vec(step(), 0..200),
    ) {
        let settings = EngineSettings::default().with_seed(seed);
        let mut engine = GameEngine::new(settings);
        engine.start(&config(players, num_pairs)).unwrap();

        let mut matched = HashSet::new();
        for step in steps {
            match step {
                Step::Tap(index) => {
                    let round = engine.round().unwrap();
                    let id = round.cards()[index % round.cards().len()].id;
                    engine.tap(id);
                }
                Step::Advance(ms) => {
                    engine.advance(Duration::from_millis(ms));
                }
            }

            let round = engine.round().unwrap();
            prop_assert!(round.flipped().len() <= 2);
            prop_assert_eq!(round.pending().is_some(), round.flipped().len() == 2);
            prop_assert!(round.current_player().index() < players);
            prop_assert!(round.consecutive_matches() < 3);

            // Matched cards never come back
            for id in &matched {
                prop_assert!(round.card(*id).unwrap().is_matched);
            }
            for card in round.cards().iter().filter(|c| c.is_matched) {
                prop_assert!(!card.is_flipped);
                matched.insert(card.id);
            }

            let score: u32 = engine.players().iter().map(|p| p.score).sum();
            prop_assert_eq!(score as usize * 2, matched.len());
            prop_assert_eq!(round.is_over(), matched.len() == round.cards().len());
        }
    }

    #[test]
    fn solo_never_rotates(
        seed in any::<u64>(),
        taps in prop::collection::vec(0usize..20, 0..100),
    ) {
        let mut engine = GameEngine::new(EngineSettings::headless(seed));
        engine.start(&RoundConfig::solo("Willa", 10)).unwrap();

        for index in taps {
            let id = engine.round().unwrap().cards()[index].id;
            engine.tap(id);
            engine.advance(Duration::ZERO);
            prop_assert_eq!(engine.round().unwrap().current_player().index(), 0);
        }
    }
}
