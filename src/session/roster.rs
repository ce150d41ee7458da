//! The setup screen's ordered list of player names.
//!
//! Every mutation is written through to the `NameStore`. Store failures are
//! logged and otherwise ignored; the roster in memory is always the truth.

use std::sync::Arc;

use tracing::warn;

use super::prefs::NameStore;
use crate::core::{ConfigError, RoundConfig, Theme, MAX_PLAYERS, MIN_MULTIPLAYER};

/// Names used when nothing has been saved yet.
pub const DEFAULT_NAMES: [&str; 2] = ["Willa", "Lark"];

/// Editable multiplayer roster.
pub struct PlayerRoster {
    names: Vec<String>,
    store: Arc<dyn NameStore>,
}

impl std::fmt::Debug for PlayerRoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerRoster")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

impl PlayerRoster {
    /// Load saved names, falling back to the defaults when the store fails
    /// or holds fewer than two names.
    pub fn load(store: Arc<dyn NameStore>) -> Self {
        let names = match store.load_names() {
            Ok(names) if names.len() >= MIN_MULTIPLAYER => {
                names.into_iter().take(MAX_PLAYERS).collect()
            }
            Ok(_) => default_names(),
            Err(err) => {
                warn!(error = %err, "failed to load player names, using defaults");
                default_names()
            }
        };
        Self { names, store }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn can_add(&self) -> bool {
        self.names.len() < MAX_PLAYERS
    }

    #[must_use]
    pub fn can_remove(&self) -> bool {
        self.names.len() > MIN_MULTIPLAYER
    }

    /// Append an empty slot.
    pub fn add_player(&mut self) -> Result<(), ConfigError> {
        if !self.can_add() {
            return Err(ConfigError::TooManyPlayers { max: MAX_PLAYERS });
        }
        self.names.push(String::new());
        self.persist();
        Ok(())
    }

    /// Remove the player at `index` and return their name, or `None` for an
    /// index past the end.
    pub fn remove_player(&mut self, index: usize) -> Result<Option<String>, ConfigError> {
        if !self.can_remove() {
            return Err(ConfigError::TooFewPlayers {
                min: MIN_MULTIPLAYER,
            });
        }
        if index >= self.names.len() {
            return Ok(None);
        }
        let name = self.names.remove(index);
        self.persist();
        Ok(Some(name))
    }

    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> bool {
        let Some(slot) = self.names.get_mut(index) else {
            return false;
        };
        *slot = name.into();
        self.persist();
        true
    }

    /// Move a player to a new position, shifting the others.
    pub fn move_player(&mut self, from: usize, to: usize) -> bool {
        if from >= self.names.len() || to >= self.names.len() {
            return false;
        }
        if from != to {
            let name = self.names.remove(from);
            self.names.insert(to, name);
            self.persist();
        }
        true
    }

    /// Any name blank after trimming.
    #[must_use]
    pub fn has_empty_names(&self) -> bool {
        self.names.iter().any(|name| name.trim().is_empty())
    }

    /// Multiplayer configuration for the current names.
    pub fn round_config(&self, num_pairs: u8, theme: Theme) -> Result<RoundConfig, ConfigError> {
        let config = RoundConfig::multiplayer(self.names.iter().cloned(), num_pairs).with_theme(theme);
        config.validate()?;
        Ok(config)
    }

    fn persist(&self) {
        if let Err(err) = self.store.save_names(&self.names) {
            warn!(error = %err, "failed to save player names");
        }
    }
}

fn default_names() -> Vec<String> {
    DEFAULT_NAMES.iter().map(|name| name.to_string()).collect()
}
