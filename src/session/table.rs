//! The game table: engine, computer opponent, and collaborators together.
//!
//! ## Responsibilities
//!
//! - Refuse human taps while the computer holds the turn.
//! - Drive the computer's two reveals on the engine clock, each after the
//!   think delay. Every scheduled step carries the round generation and is
//!   dropped if the round has changed by the time it fires.
//! - Keep the computer's reveal single-flight with the `computer_busy` guard.
//! - Forward engine events to the computer's memory and hand each finished
//!   round to the analytics sink exactly once.
//!
//! Collaborator failures are logged at `warn` and never reach the game.
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use memory_match::core::{Difficulty, EngineSettings, RoundConfig};
//! use memory_match::session::{InMemoryAnalytics, Session};
//!
//! let analytics = Arc::new(InMemoryAnalytics::new());
//! let mut session = Session::new(EngineSettings::headless(5), analytics);
//! session.start(&RoundConfig::vs_computer("Willa", Difficulty::Hard, 3)).unwrap();
//! session.advance(Duration::ZERO);
//! assert!(!session.computer_busy());
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace, warn};

use super::analytics::{AggregateStats, AnalyticsSink, RoundLog};
use crate::computer::{ComputerPolicy, FirstPick};
use crate::core::config::duration_ms;
use crate::core::{
    CardId, EngineSettings, GameError, GameEvent, GameMode, RoundConfig, RoundSnapshot,
    RoundSummary,
};
use crate::engine::{GameEngine, IgnoreReason, Resolution, TapOutcome};

/// One half of the computer's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComputerStep {
    RevealFirst,
    RevealSecond(FirstPick),
}

/// A computer step waiting on the engine clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    /// Round the step was scheduled in.
    pub generation: u64,
    pub due_at_ms: u64,
    pub step: ComputerStep,
}

/// A playable table.
pub struct Session {
    engine: GameEngine,
    computer: Option<ComputerPolicy>,
    analytics: Arc<dyn AnalyticsSink>,
    scheduled: Option<ScheduledStep>,
    computer_busy: bool,
    events: Vec<GameEvent>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("engine", &self.engine)
            .field("computer", &self.computer)
            .field("scheduled", &self.scheduled)
            .field("computer_busy", &self.computer_busy)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(settings: EngineSettings, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            engine: GameEngine::new(settings),
            computer: None,
            analytics,
            scheduled: None,
            computer_busy: false,
            events: Vec::new(),
        }
    }

    // === Intents ===

    /// Deal a new round. Any scheduled computer step is abandoned.
    pub fn start(&mut self, config: &RoundConfig) -> Result<u64, GameError> {
        let generation = self.engine.start(config)?;
        self.scheduled = None;
        self.computer_busy = false;

        self.computer = match config.mode {
            GameMode::VsComputer { difficulty } => match self.computer.take() {
                Some(mut policy) => {
                    policy.set_difficulty(difficulty);
                    Some(policy)
                }
                None => Some(ComputerPolicy::new(difficulty, self.engine.fork_rng())),
            },
            GameMode::Multiplayer | GameMode::Solo => None,
        };

        self.pump();
        Ok(generation)
    }

    /// A human tap. Ignored while the computer holds the turn.
    pub fn tap(&mut self, card: CardId) -> TapOutcome {
        let live = self.engine.round().is_some_and(|round| !round.is_over());
        if live && (self.computer_busy || self.is_computer_turn()) {
            trace!(card = card.raw(), "tap ignored, computer's turn");
            return TapOutcome::Ignored(IgnoreReason::NotHumanTurn);
        }

        let outcome = self.engine.tap(card);
        self.pump();
        outcome
    }

    /// Abandon the round.
    pub fn end_round(&mut self) {
        self.engine.end_round();
        self.scheduled = None;
        self.computer_busy = false;
        if let Some(policy) = self.computer.as_mut() {
            policy.reset();
        }
        self.pump();
    }

    // === Clock ===

    /// Move the clock forward, firing every resolution and computer step
    /// that falls due, in deadline order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Resolution> {
        let target = self.engine.now_ms().saturating_add(duration_ms(elapsed));
        let mut resolutions = Vec::new();

        while let Some(due) = self.next_deadline().filter(|&due| due <= target) {
            self.step_to(due, &mut resolutions);
        }

        let rest = target.saturating_sub(self.engine.now_ms());
        if let Some(resolution) = self.engine.advance(Duration::from_millis(rest)) {
            resolutions.push(resolution);
        }
        self.pump();
        resolutions
    }

    /// Run the clock until nothing is scheduled: every pending resolution
    /// fires and the computer finishes its turn.
    pub fn settle(&mut self) -> Vec<Resolution> {
        let mut resolutions = Vec::new();
        while let Some(due) = self.next_deadline() {
            self.step_to(due, &mut resolutions);
        }
        resolutions
    }

    /// Fire the pending resolution from an external timer.
    pub fn resolve(&mut self, generation: u64) -> Option<Resolution> {
        let resolution = self.engine.resolve(generation);
        self.pump();
        resolution
    }

    fn next_deadline(&self) -> Option<u64> {
        let pending = self
            .engine
            .round()
            .and_then(|round| round.pending())
            .map(|p| p.due_at_ms);
        let scheduled = self.scheduled.map(|s| s.due_at_ms);

        match (pending, scheduled) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn step_to(&mut self, due: u64, resolutions: &mut Vec<Resolution>) {
        let gap = due.saturating_sub(self.engine.now_ms());
        if let Some(resolution) = self.engine.advance(Duration::from_millis(gap)) {
            resolutions.push(resolution);
        }
        self.pump();
        self.run_due_step();
    }

    // === Computer ===

    fn is_computer_turn(&self) -> bool {
        self.engine.current_player().is_some_and(|p| p.is_computer)
    }

    fn maybe_schedule_computer(&mut self) {
        if self.computer.is_none() || self.computer_busy || self.scheduled.is_some() {
            return;
        }
        let Some(round) = self.engine.round() else {
            return;
        };
        if round.is_over() || round.pending().is_some() || !round.flipped().is_empty() {
            return;
        }
        if self.is_computer_turn() {
            self.computer_busy = true;
            self.schedule(ComputerStep::RevealFirst);
        }
    }

    fn schedule(&mut self, step: ComputerStep) {
        let due_at_ms = self
            .engine
            .now_ms()
            .saturating_add(self.engine.settings().think_delay_ms);
        debug!(?step, due_at_ms, "computer step scheduled");
        self.scheduled = Some(ScheduledStep {
            generation: self.engine.generation(),
            due_at_ms,
            step,
        });
    }

    fn run_due_step(&mut self) {
        let now = self.engine.now_ms();
        let Some(scheduled) = self.scheduled.filter(|s| s.due_at_ms <= now) else {
            return;
        };
        self.scheduled = None;

        if scheduled.generation != self.engine.generation() {
            trace!(
                generation = scheduled.generation,
                current = self.engine.generation(),
                "stale computer step dropped"
            );
            return;
        }

        match scheduled.step {
            ComputerStep::RevealFirst => self.reveal_first(),
            ComputerStep::RevealSecond(pick) => self.reveal_second(pick),
        }
        self.pump();
    }

    fn reveal_first(&mut self) {
        let pick = match (self.computer.as_mut(), self.engine.round()) {
            (Some(policy), Some(round)) => policy.begin_turn(round),
            _ => None,
        };

        // A decline leaves the guard up so the turn cannot be re-entered.
        let Some(pick) = pick else {
            warn!("computer declined its turn");
            return;
        };

        if let TapOutcome::Ignored(reason) = self.engine.tap(pick.card) {
            warn!(card = pick.card.raw(), ?reason, "computer first reveal rejected");
            self.computer_busy = false;
            return;
        }
        self.schedule(ComputerStep::RevealSecond(pick));
    }

    fn reveal_second(&mut self, pick: FirstPick) {
        let second = match (self.computer.as_mut(), self.engine.round()) {
            (Some(policy), Some(round)) => policy.pick_second(round, &pick),
            _ => None,
        };
        self.computer_busy = false;

        let Some(second) = second else {
            warn!(first = pick.card.raw(), "computer found no second card");
            return;
        };
        if let TapOutcome::Ignored(reason) = self.engine.tap(second) {
            warn!(card = second.raw(), ?reason, "computer second reveal rejected");
        }
    }

    // === Events and collaborators ===

    fn pump(&mut self) {
        for event in self.engine.drain_events() {
            if let Some(policy) = self.computer.as_mut() {
                policy.observe_event(&event);
            }
            if let GameEvent::RoundComplete(summary) = &event {
                self.log_round(summary);
            }
            self.events.push(event);
        }
        self.maybe_schedule_computer();
    }

    fn log_round(&self, summary: &RoundSummary) {
        let log = RoundLog::from_summary(summary);
        if let Err(err) = self.analytics.log_completed_round(&log) {
            warn!(error = %err, generation = summary.generation, "failed to log completed round");
        }
    }

    /// Aggregate counts, or `None` when the sink is unavailable.
    pub fn fetch_aggregate_stats(&self) -> Option<AggregateStats> {
        match self.analytics.fetch_aggregate_stats() {
            Ok(stats) => Some(stats),
            Err(err) => {
                warn!(error = %err, "failed to fetch aggregate stats");
                None
            }
        }
    }

    // === Observation ===

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn computer(&self) -> Option<&ComputerPolicy> {
        self.computer.as_ref()
    }

    /// The computer is mid-turn.
    #[must_use]
    pub fn computer_busy(&self) -> bool {
        self.computer_busy
    }

    #[must_use]
    pub fn scheduled(&self) -> Option<ScheduledStep> {
        self.scheduled
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.engine.snapshot()
    }

    /// Take every event since the last drain.
    ///
    /// The queue is unbounded. A front end that does not consume events must
    /// still drain them periodically, once per frame or per round.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
