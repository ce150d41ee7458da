//! The game engine: deal, tap, resolve, rotate.
//!
//! ## Tap/resolve protocol
//!
//! 1. `tap` flips a card. The second flip of an attempt creates a
//!    `PendingResolution` due `resolve_delay_ms` later on the engine clock.
//! 2. While a resolution is pending every tap is ignored. This is the only
//!    backpressure the board needs: at most one attempt is ever in flight.
//! 3. `advance` moves the clock and fires the resolution once due. Headless
//!    callers may fire it early with `resolve_now`; UI timers call
//!    `resolve(generation)` with the generation they were scheduled under.
//!
//! ## Generations
//!
//! Every `start` and `end_round` bumps the generation. A resolution or timer
//! carrying an older generation is ignored, so a slow timer can never touch
//! a later round.
//!
//! ## Example
//!
//! ```
//! use memory_match::core::{EngineSettings, RoundConfig};
//! use memory_match::engine::{GameEngine, TapOutcome};
//!
//! let mut engine = GameEngine::new(EngineSettings::headless(7));
//! engine.start(&RoundConfig::multiplayer(["A", "B"], 2)).unwrap();
//!
//! let first = engine.round().unwrap().cards()[0].id;
//! assert!(matches!(engine.tap(first), TapOutcome::Flipped { .. }));
//! ```

use std::time::Duration;

use tracing::{debug, info, trace};

use super::commentary::Performance;
use super::ranking::{rank_players, winners, RankedPlayer};
use crate::core::config::duration_ms;
use crate::core::{
    build_deck, CardId, EngineSettings, GameError, GameEvent, GameMode, GameRng,
    PendingResolution, Player, PlayerId, RoundConfig, RoundSnapshot, RoundState, RoundSummary,
    SymbolIndex, MAX_CONSECUTIVE_MATCHES,
};

/// Why a tap changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// No round has been started.
    NoRound,
    /// Every pair is already found.
    RoundOver,
    /// Two cards are up and waiting to resolve.
    ResolutionPending,
    /// The id is not on this board.
    UnknownCard,
    /// The card is already face-up.
    AlreadyFlipped,
    /// The card was already claimed.
    AlreadyMatched,
    /// The current seat is not tap-controlled.
    NotHumanTurn,
}

/// Result of a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing happened.
    Ignored(IgnoreReason),
    /// First card of an attempt turned up.
    Flipped { card: CardId, symbol: SymbolIndex },
    /// Second card turned up; resolution is scheduled.
    PairPending(PendingResolution),
}

impl TapOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, TapOutcome::Ignored(_))
    }
}

/// Result of resolving a pair attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Matched {
        player: PlayerId,
        symbol: SymbolIndex,
        /// Seat the turn passed to, if the consecutive-match cap forced it.
        turn_passed_to: Option<PlayerId>,
        round_complete: bool,
    },
    Missed {
        player: PlayerId,
        /// `None` in solo mode.
        turn_passed_to: Option<PlayerId>,
    },
}

/// Owns the round and is its only mutator.
#[derive(Debug)]
pub struct GameEngine {
    settings: EngineSettings,
    rng: GameRng,
    players: Vec<Player>,
    round: Option<RoundState>,
    generation: u64,
    clock_ms: u64,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create an engine with no round in progress.
    #[must_use]
    pub fn new(settings: EngineSettings) -> Self {
        let rng = GameRng::from_seed_or_entropy(settings.seed);
        Self {
            settings,
            rng,
            players: Vec::new(),
            round: None,
            generation: 0,
            clock_ms: 0,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Independent RNG stream derived from the engine's seed.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    // === Lifecycle ===

    /// Validate `config` and deal a fresh round.
    ///
    /// Any previous round is discarded along with its pending resolution.
    /// Returns the new round's generation.
    pub fn start(&mut self, config: &RoundConfig) -> Result<u64, GameError> {
        config.validate()?;

        self.generation += 1;
        self.players = config.build_players();

        let mut deck = build_deck(config.num_pairs);
        self.rng.shuffle(&mut deck);

        self.round = Some(RoundState::new(
            self.generation,
            config.mode,
            config.theme,
            config.num_pairs,
            deck,
            self.players.len(),
            self.clock_ms,
        ));

        info!(
            generation = self.generation,
            num_pairs = config.num_pairs,
            players = self.players.len(),
            mode = %config.mode,
            theme = config.theme.key(),
            "round started"
        );
        self.events.push(GameEvent::RoundStarted {
            generation: self.generation,
            num_pairs: config.num_pairs,
            player_count: self.players.len(),
        });

        Ok(self.generation)
    }

    /// Abandon the current round and clear every player's tallies.
    pub fn end_round(&mut self) {
        if let Some(round) = self.round.take() {
            info!(
                generation = round.generation,
                finished = round.is_over,
                "round ended"
            );
        }
        self.generation += 1;
        for player in &mut self.players {
            player.reset_round();
        }
    }

    // === Intents ===

    /// Flip a card. Invalid taps are ignored, never errors.
    pub fn tap(&mut self, card_id: CardId) -> TapOutcome {
        let outcome = self.try_tap(card_id);
        if let TapOutcome::Ignored(reason) = outcome {
            trace!(card = card_id.raw(), ?reason, "tap ignored");
        }
        outcome
    }

    fn try_tap(&mut self, card_id: CardId) -> TapOutcome {
        let Some(round) = self.round.as_mut() else {
            return TapOutcome::Ignored(IgnoreReason::NoRound);
        };
        if round.is_over {
            return TapOutcome::Ignored(IgnoreReason::RoundOver);
        }
        if round.pending.is_some() {
            return TapOutcome::Ignored(IgnoreReason::ResolutionPending);
        }

        let player = round.current_player;
        let Some(card) = round.card_mut(card_id) else {
            return TapOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        if card.is_matched {
            return TapOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if card.is_flipped {
            return TapOutcome::Ignored(IgnoreReason::AlreadyFlipped);
        }

        card.is_flipped = true;
        let symbol = card.symbol;
        round.flipped.push(card_id);

        debug!(
            generation = round.generation,
            player = player.index(),
            card = card_id.raw(),
            symbol = symbol.0,
            "card flipped"
        );
        self.events.push(GameEvent::CardFlipped {
            player,
            card: card_id,
            symbol,
        });

        if let [first, second] = round.flipped[..] {
            let pending = PendingResolution {
                generation: round.generation,
                first,
                second,
                due_at_ms: self.clock_ms.saturating_add(self.settings.resolve_delay_ms),
            };
            round.pending = Some(pending);
            debug!(
                generation = round.generation,
                due_at_ms = pending.due_at_ms,
                "resolution pending"
            );
            self.events.push(GameEvent::ResolutionPending(pending));
            return TapOutcome::PairPending(pending);
        }

        TapOutcome::Flipped {
            card: card_id,
            symbol,
        }
    }

    // === Clock and resolution ===

    /// Current engine clock.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Move the clock forward and fire the pending resolution if it is due.
    ///
    /// The clock saturates at `u64::MAX`, so `Duration::MAX` runs everything.
    pub fn advance(&mut self, elapsed: Duration) -> Option<Resolution> {
        self.clock_ms = self.clock_ms.saturating_add(duration_ms(elapsed));

        let due = self
            .round
            .as_ref()
            .and_then(RoundState::pending)
            .is_some_and(|p| p.due_at_ms <= self.clock_ms);

        if due {
            self.resolve_pending()
        } else {
            None
        }
    }

    /// Fire the pending resolution from an external timer.
    ///
    /// Ignored unless `generation` is the live round's generation.
    pub fn resolve(&mut self, generation: u64) -> Option<Resolution> {
        let live = self
            .round
            .as_ref()
            .and_then(RoundState::pending)
            .is_some_and(|p| p.generation == generation && generation == self.generation);

        if !live {
            trace!(generation, current = self.generation, "stale resolution ignored");
            return None;
        }
        self.resolve_pending()
    }

    /// Fire the pending resolution immediately, skipping the visual pause.
    pub fn resolve_now(&mut self) -> Option<Resolution> {
        self.resolve_pending()
    }

    fn resolve_pending(&mut self) -> Option<Resolution> {
        let round = self.round.as_mut()?;
        let pending = round.pending.take()?;
        round.flipped.clear();
        round.attempts += 1;

        let player = round.current_player;
        let cards = [pending.first, pending.second];
        let first_symbol = round.card(pending.first)?.symbol;
        let second_symbol = round.card(pending.second)?.symbol;
        let matched = first_symbol == second_symbol;

        for id in cards {
            if let Some(card) = round.card_mut(id) {
                card.is_flipped = false;
                card.is_matched |= matched;
            }
        }

        if !matched {
            round.consecutive_matches = 0;
            debug!(generation = round.generation, player = player.index(), "pair missed");
            self.events.push(GameEvent::PairMissed { player, cards });
            let turn_passed_to = Self::rotate(round, &mut self.events);
            return Some(Resolution::Missed {
                player,
                turn_passed_to,
            });
        }

        round.matched_pairs += 1;
        round.consecutive_matches += 1;
        if let Some(scorer) = self.players.get_mut(player.index()) {
            scorer.claim(first_symbol);
        }
        debug!(
            generation = round.generation,
            player = player.index(),
            symbol = first_symbol.0,
            streak = round.consecutive_matches,
            "pair matched"
        );
        self.events.push(GameEvent::PairMatched {
            player,
            symbol: first_symbol,
            cards,
        });

        let mut turn_passed_to = None;
        if round.consecutive_matches >= MAX_CONSECUTIVE_MATCHES {
            round.consecutive_matches = 0;
            turn_passed_to = Self::rotate(round, &mut self.events);
        }

        let round_complete = round.matched_pairs == round.num_pairs && !round.is_over;
        if round_complete {
            round.is_over = true;
            let summary = Self::summarize(round, &self.players, self.clock_ms);
            info!(
                generation = summary.generation,
                attempts = summary.attempts,
                duration_secs = summary.duration.as_secs(),
                winners = ?summary.winner_names,
                "round complete"
            );
            self.events.push(GameEvent::RoundComplete(summary));
        }

        Some(Resolution::Matched {
            player,
            symbol: first_symbol,
            turn_passed_to,
            round_complete,
        })
    }

    /// Pass the turn to the next seat. No-op with a single player.
    fn rotate(round: &mut RoundState, events: &mut Vec<GameEvent>) -> Option<PlayerId> {
        if round.player_count <= 1 {
            return None;
        }
        let from = round.current_player;
        let to = from.next(round.player_count);
        round.current_player = to;
        debug!(from = from.index(), to = to.index(), "turn rotated");
        events.push(GameEvent::TurnRotated { from, to });
        Some(to)
    }

    fn summarize(round: &RoundState, players: &[Player], now_ms: u64) -> RoundSummary {
        RoundSummary {
            generation: round.generation,
            mode: round.mode,
            theme: round.theme,
            num_pairs: round.num_pairs,
            player_names: players.iter().map(|p| p.name.clone()).collect(),
            scores: players.iter().map(|p| p.score).collect(),
            winner_names: winners(players).into_iter().map(|p| p.name.clone()).collect(),
            attempts: round.attempts,
            duration: Duration::from_millis(now_ms.saturating_sub(round.started_at_ms)),
        }
    }

    // === Observation ===

    /// Generation of the live round, or of the last one ended.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The live round, if any.
    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        let round = self.round.as_ref()?;
        self.players.get(round.current_player.index())
    }

    /// Owned view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.round
            .as_ref()
            .map(|round| RoundSnapshot::capture(round, &self.players))
    }

    /// Take every event queued since the last drain.
    ///
    /// Events accumulate until drained; callers own that cadence.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Results ===

    /// Players holding the top score.
    #[must_use]
    pub fn winners(&self) -> Vec<&Player> {
        winners(&self.players)
    }

    /// Results table with medal ranks.
    #[must_use]
    pub fn rankings(&self) -> Vec<RankedPlayer> {
        rank_players(&self.players)
    }

    /// Grade for a finished solo round.
    #[must_use]
    pub fn performance(&self) -> Option<Performance> {
        let round = self.round.as_ref()?;
        (round.is_over && round.mode == GameMode::Solo)
            .then(|| Performance::assess(round.num_pairs, round.attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigError, Difficulty, Theme};

    fn engine() -> GameEngine {
        GameEngine::new(EngineSettings::headless(42))
    }

    /// Both card ids for a symbol on the live board.
    fn pair_of(engine: &GameEngine, symbol: u8) -> (CardId, CardId) {
        let ids: Vec<_> = engine
            .round()
            .unwrap()
            .cards()
            .iter()
            .filter(|c| c.symbol == SymbolIndex::new(symbol))
            .map(|c| c.id)
            .collect();
        (ids[0], ids[1])
    }

    #[test]
    fn test_start_deals_pairs() {
        let mut engine = engine();
        let generation = engine.start(&RoundConfig::multiplayer(["A", "B"], 4)).unwrap();
        assert_eq!(generation, 1);

        let round = engine.round().unwrap();
        assert_eq!(round.cards().len(), 8);
        for symbol in SymbolIndex::all(4) {
            assert_eq!(round.cards().iter().filter(|c| c.symbol == symbol).count(), 2);
        }
        assert!(matches!(
            engine.drain_events().as_slice(),
            [GameEvent::RoundStarted { generation: 1, num_pairs: 4, player_count: 2 }]
        ));
    }

    #[test]
    fn test_start_rejects_bad_config() {
        let mut engine = engine();
        let result = engine.start(&RoundConfig::multiplayer(["A", "B"], 1));
        assert!(matches!(
            result,
            Err(GameError::InvalidConfiguration(ConfigError::PairCountOutOfRange { .. }))
        ));
        assert!(engine.round().is_none());
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_tap_without_round() {
        let mut engine = engine();
        assert_eq!(
            engine.tap(CardId::new(0)),
            TapOutcome::Ignored(IgnoreReason::NoRound)
        );
    }

    #[test]
    fn test_tap_same_card_twice() {
        let mut engine = engine();
        engine.start(&RoundConfig::multiplayer(["A", "B"], 3)).unwrap();
        let (a, _) = pair_of(&engine, 0);

        assert!(matches!(engine.tap(a), TapOutcome::Flipped { .. }));
        assert_eq!(engine.tap(a), TapOutcome::Ignored(IgnoreReason::AlreadyFlipped));
        assert_eq!(engine.round().unwrap().flipped(), &[a]);
    }

    #[test]
    fn test_tap_unknown_card() {
        let mut engine = engine();
        engine.start(&RoundConfig::multiplayer(["A", "B"], 2)).unwrap();
        assert_eq!(
            engine.tap(CardId::new(400)),
            TapOutcome::Ignored(IgnoreReason::UnknownCard)
        );
    }

    #[test]
    fn test_taps_ignored_while_pending() {
        let mut engine = engine();
        engine.start(&RoundConfig::multiplayer(["A", "B"], 3)).unwrap();
        let (a, _) = pair_of(&engine, 0);
        let (b, c) = pair_of(&engine, 1);

        engine.tap(a);
        assert!(matches!(engine.tap(b), TapOutcome::PairPending(_)));
        assert_eq!(
            engine.tap(c),
            TapOutcome::Ignored(IgnoreReason::ResolutionPending)
        );
        assert_eq!(engine.round().unwrap().flipped().len(), 2);
    }

    #[test]
    fn test_match_keeps_turn() {
        let mut engine = engine();
        engine.start(&RoundConfig::multiplayer(["A", "B"], 4)).unwrap();
        let (a, b) = pair_of(&engine, 2);

        engine.tap(a);
        engine.tap(b);
        let resolution = engine.resolve_now();

        assert_eq!(
            resolution,
            Some(Resolution::Matched {
                player: PlayerId::new(0),
                symbol: SymbolIndex::new(2),
                turn_passed_to: None,
                round_complete: false,
            })
        );
        let round = engine.round().unwrap();
        assert!(round.card(a).unwrap().is_matched);
        assert!(!round.card(a).unwrap().is_flipped);
        assert_eq!(round.current_player(), PlayerId::new(0));
        assert_eq!(engine.players()[0].score, 1);
        assert_eq!(engine.players()[0].found_symbols, vec![SymbolIndex::new(2)]);
    }

    #[test]
    fn test_miss_rotates_turn() {
        let mut engine = engine();
        engine.start(&RoundConfig::multiplayer(["A", "B", "C"], 4)).unwrap();
        let (a, _) = pair_of(&engine, 0);
        let (b, _) = pair_of(&engine, 1);

        engine.tap(a);
        engine.tap(b);
        let resolution = engine.resolve_now();

        assert_eq!(
            resolution,
            Some(Resolution::Missed {
                player: PlayerId::new(0),
                turn_passed_to: Some(PlayerId::new(1)),
            })
        );
        let round = engine.round().unwrap();
        assert!(round.card(a).unwrap().is_available());
        assert!(round.card(b).unwrap().is_available());
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn test_advance_respects_delay() {
        let mut engine = GameEngine::new(EngineSettings::default().with_seed(1));
        engine.start(&RoundConfig::multiplayer(["A", "B"], 2)).unwrap();
        let (a, b) = pair_of(&engine, 0);

        engine.tap(a);
        engine.tap(b);

        assert_eq!(engine.advance(Duration::from_millis(999)), None);
        assert!(engine.round().unwrap().pending().is_some());
        assert!(engine.advance(Duration::from_millis(1)).is_some());
        assert!(engine.round().unwrap().pending().is_none());
    }

    #[test]
    fn test_huge_resolve_delay_saturates() {
        let mut settings = EngineSettings::headless(3);
        settings.resolve_delay_ms = u64::MAX;
        let mut engine = GameEngine::new(settings);
        engine.start(&RoundConfig::multiplayer(["A", "B"], 2)).unwrap();
        engine.advance(Duration::from_millis(10));
        let (a, b) = pair_of(&engine, 0);

        engine.tap(a);
        let pending = match engine.tap(b) {
            TapOutcome::PairPending(pending) => pending,
            other => panic!("expected pending resolution, got {:?}", other),
        };
        assert_eq!(pending.due_at_ms, u64::MAX);

        assert_eq!(engine.advance(Duration::from_secs(3600)), None);
        assert!(engine.advance(Duration::MAX).is_some());
        assert_eq!(engine.now_ms(), u64::MAX);
    }

    #[test]
    fn test_advance_max_saturates_clock() {
        let mut engine = engine();
        engine.start(&RoundConfig::multiplayer(["A", "B"], 2)).unwrap();
        engine.advance(Duration::from_millis(10));
        engine.advance(Duration::MAX);
        assert_eq!(engine.now_ms(), u64::MAX);

        // Taps still work on a saturated clock
        let (a, b) = pair_of(&engine, 1);
        engine.tap(a);
        assert!(matches!(engine.tap(b), TapOutcome::PairPending(_)));
        assert!(matches!(
            engine.advance(Duration::MAX),
            Some(Resolution::Matched { .. })
        ));
    }

    #[test]
    fn test_stale_generation_ignored() {
        let mut engine = engine();
        let old = engine.start(&RoundConfig::multiplayer(["A", "B"], 2)).unwrap();
        let (a, b) = pair_of(&engine, 0);
        engine.tap(a);
        engine.tap(b);

        let new = engine.start(&RoundConfig::multiplayer(["A", "B"], 2)).unwrap();
        assert_ne!(old, new);
        assert_eq!(engine.resolve(old), None);

        // The new round is untouched by the old attempt
        let round = engine.round().unwrap();
        assert!(round.pending().is_none());
        assert!(round.cards().iter().all(|c| c.is_available()));
    }

    #[test]
    fn test_resolve_with_live_generation() {
        let mut engine = engine();
        let generation = engine.start(&RoundConfig::multiplayer(["A", "B"], 2)).unwrap();
        let (a, b) = pair_of(&engine, 1);
        engine.tap(a);
        engine.tap(b);
        assert!(matches!(
            engine.resolve(generation),
            Some(Resolution::Matched { .. })
        ));
    }

    #[test]
    fn test_solo_never_rotates() {
        let mut engine = engine();
        engine.start(&RoundConfig::solo("Willa", 3)).unwrap();
        let (a, _) = pair_of(&engine, 0);
        let (b, _) = pair_of(&engine, 1);

        engine.tap(a);
        engine.tap(b);
        assert_eq!(
            engine.resolve_now(),
            Some(Resolution::Missed {
                player: PlayerId::new(0),
                turn_passed_to: None
            })
        );
        assert_eq!(engine.round().unwrap().current_player(), PlayerId::new(0));
        assert_eq!(engine.round().unwrap().attempts(), 1);
        assert!(!engine
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::TurnRotated { .. })));
    }

    #[test]
    fn test_solo_performance() {
        let mut engine = engine();
        engine.start(&RoundConfig::solo("Willa", 2)).unwrap();
        assert_eq!(engine.performance(), None);

        for symbol in 0..2 {
            let (a, b) = pair_of(&engine, symbol);
            engine.tap(a);
            engine.tap(b);
            engine.resolve_now();
        }
        assert_eq!(engine.performance(), Some(Performance::Perfect));
    }

    #[test]
    fn test_round_complete_summary() {
        let mut engine = GameEngine::new(EngineSettings::default().with_seed(9));
        let config = RoundConfig::multiplayer(["A", "B"], 2).with_theme(Theme::Sports);
        engine.start(&config).unwrap();
        engine.advance(Duration::from_secs(5));

        for symbol in 0..2 {
            let (a, b) = pair_of(&engine, symbol);
            engine.tap(a);
            engine.tap(b);
            engine.advance(Duration::from_secs(1));
        }

        let summaries: Vec<_> = engine
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::RoundComplete(summary) => Some(summary),
                _ => None,
            })
            .collect();
        assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        assert_eq!(summary.scores, vec![2, 0]);
        assert_eq!(summary.winner_names, vec!["A".to_string()]);
        assert_eq!(summary.theme, Theme::Sports);
        assert_eq!(summary.player_count(), 2);
        assert_eq!(summary.duration, Duration::from_secs(7));
    }

    #[test]
    fn test_end_round_resets_players() {
        let mut engine = engine();
        engine.start(&RoundConfig::multiplayer(["A", "B"], 2)).unwrap();
        let (a, b) = pair_of(&engine, 0);
        engine.tap(a);
        engine.tap(b);
        engine.resolve_now();
        assert_eq!(engine.players()[0].score, 1);

        let before = engine.generation();
        engine.end_round();

        assert!(engine.round().is_none());
        assert!(engine.generation() > before);
        assert!(engine.players().iter().all(|p| p.score == 0 && p.found_symbols.is_empty()));
        assert_eq!(engine.tap(a), TapOutcome::Ignored(IgnoreReason::NoRound));
    }

    #[test]
    fn test_vs_computer_seats_computer() {
        let mut engine = engine();
        engine
            .start(&RoundConfig::vs_computer("Lark", Difficulty::Easy, 3))
            .unwrap();
        assert!(!engine.players()[0].is_computer);
        assert!(engine.players()[1].is_computer);
    }

    #[test]
    fn test_snapshot_reflects_pending() {
        let mut engine = engine();
        engine.start(&RoundConfig::multiplayer(["A", "B"], 2)).unwrap();
        let (a, _) = pair_of(&engine, 0);
        let (b, _) = pair_of(&engine, 1);
        engine.tap(a);
        engine.tap(b);

        let snapshot = engine.snapshot().unwrap();
        assert!(snapshot.resolution_pending);
        assert_eq!(snapshot.flipped.len(), 2);
        assert_eq!(snapshot.current().map(|p| p.name.as_str()), Some("A"));
    }
}
