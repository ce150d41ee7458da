//! Persisted player names.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::CollaboratorError;

/// Load and save the setup screen's player names. Best-effort.
pub trait NameStore: Send + Sync {
    fn load_names(&self) -> Result<Vec<String>, CollaboratorError>;

    fn save_names(&self, names: &[String]) -> Result<(), CollaboratorError>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryNameStore {
    names: Mutex<Vec<String>>,
}

impl MemoryNameStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with names.
    pub fn with_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: Mutex::new(names.into_iter().map(Into::into).collect()),
        }
    }
}

fn poisoned<T>(_: T) -> CollaboratorError {
    CollaboratorError::Unavailable("name store lock poisoned".into())
}

impl NameStore for MemoryNameStore {
    fn load_names(&self) -> Result<Vec<String>, CollaboratorError> {
        Ok(self.names.lock().map_err(poisoned)?.clone())
    }

    fn save_names(&self, names: &[String]) -> Result<(), CollaboratorError> {
        *self.names.lock().map_err(poisoned)? = names.to_vec();
        Ok(())
    }
}

/// Names as a JSON array in a file.
#[derive(Clone, Debug)]
pub struct JsonFileNameStore {
    path: PathBuf,
}

impl JsonFileNameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NameStore for JsonFileNameStore {
    /// A missing file loads as no names.
    fn load_names(&self) -> Result<Vec<String>, CollaboratorError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save_names(&self, names: &[String]) -> Result<(), CollaboratorError> {
        let json = serde_json::to_string(names)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
