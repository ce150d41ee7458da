//! Completed-round analytics.
//!
//! The session logs one `RoundLog` per finished round and can ask for
//! aggregate counts. Sinks are fire-and-forget: every failure comes back as
//! a `CollaboratorError` that the session logs and drops.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::core::{CollaboratorError, RoundSummary};

/// One finished round as stored by a sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLog {
    pub player_names: Vec<String>,
    pub player_scores: Vec<u32>,
    pub winner_names: Vec<String>,
    /// Theme key, e.g. `"olympics"`.
    pub theme: String,
    pub num_pairs: u8,
    pub num_players: usize,
    pub duration_seconds: u64,
}

impl RoundLog {
    #[must_use]
    pub fn from_summary(summary: &RoundSummary) -> Self {
        Self {
            player_names: summary.player_names.clone(),
            player_scores: summary.scores.clone(),
            winner_names: summary.winner_names.clone(),
            theme: summary.theme.key().to_string(),
            num_pairs: summary.num_pairs,
            num_players: summary.player_count(),
            duration_seconds: summary.duration.as_secs(),
        }
    }
}

/// Counts across every logged round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_rounds: u64,
    pub counts_by_theme: BTreeMap<String, u64>,
    pub counts_by_pair_count: BTreeMap<u8, u64>,
}

impl AggregateStats {
    /// Tally a sequence of logs.
    pub fn from_logs<'a>(logs: impl IntoIterator<Item = &'a RoundLog>) -> Self {
        let mut stats = Self::default();
        for log in logs {
            stats.record(log);
        }
        stats
    }

    fn record(&mut self, log: &RoundLog) {
        self.total_rounds += 1;
        *self.counts_by_theme.entry(log.theme.clone()).or_insert(0) += 1;
        *self.counts_by_pair_count.entry(log.num_pairs).or_insert(0) += 1;
    }
}

/// Where finished rounds go.
pub trait AnalyticsSink: Send + Sync {
    fn log_completed_round(&self, log: &RoundLog) -> Result<(), CollaboratorError>;

    fn fetch_aggregate_stats(&self) -> Result<AggregateStats, CollaboratorError>;
}

/// A sink that is never available.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAnalytics;

impl AnalyticsSink for NullAnalytics {
    fn log_completed_round(&self, _log: &RoundLog) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::Unavailable("analytics disabled".into()))
    }

    fn fetch_aggregate_stats(&self) -> Result<AggregateStats, CollaboratorError> {
        Err(CollaboratorError::Unavailable("analytics disabled".into()))
    }
}

/// Keeps logs in process.
#[derive(Debug, Default)]
pub struct InMemoryAnalytics {
    logs: Mutex<Vec<RoundLog>>,
}

impl InMemoryAnalytics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every log recorded so far.
    #[must_use]
    pub fn logs(&self) -> Vec<RoundLog> {
        self.logs.lock().map(|logs| logs.clone()).unwrap_or_default()
    }
}

fn poisoned<T>(_: T) -> CollaboratorError {
    CollaboratorError::Unavailable("analytics lock poisoned".into())
}

impl AnalyticsSink for InMemoryAnalytics {
    fn log_completed_round(&self, log: &RoundLog) -> Result<(), CollaboratorError> {
        self.logs.lock().map_err(poisoned)?.push(log.clone());
        Ok(())
    }

    fn fetch_aggregate_stats(&self) -> Result<AggregateStats, CollaboratorError> {
        let logs = self.logs.lock().map_err(poisoned)?;
        Ok(AggregateStats::from_logs(logs.iter()))
    }
}

/// Appends one JSON object per line to a file.
#[derive(Debug)]
pub struct JsonLinesAnalytics {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonLinesAnalytics {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every log back. A missing file is an empty history.
    pub fn read_logs(&self) -> Result<Vec<RoundLog>, CollaboratorError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut logs = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            logs.push(serde_json::from_str(&line)?);
        }
        Ok(logs)
    }
}

impl AnalyticsSink for JsonLinesAnalytics {
    fn log_completed_round(&self, log: &RoundLog) -> Result<(), CollaboratorError> {
        let mut line = serde_json::to_string(log)?;
        line.push('\n');

        let _guard = self.write_lock.lock().map_err(poisoned)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn fetch_aggregate_stats(&self) -> Result<AggregateStats, CollaboratorError> {
        let logs = self.read_logs()?;
        Ok(AggregateStats::from_logs(&logs))
    }
}
