use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::json_file::JsonFilePreferences;

/// Key under which the last selected track is kept.
pub const SELECTED_TRACK_KEY: &str = "apollo-odyssey-selected-track";

/// Errors surfaced by preference adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// The backing store is blocked or missing (e.g. `localStorage` disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persistence contract for the selected track.
///
/// Callers treat every error as "no stored value"; adapters should not retry.
pub trait TrackPreferenceRepository: Send + Sync {
    /// Read the last persisted track name, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn load_selected_track(&self) -> Result<Option<String>, StorageError>;

    /// Persist `track` as the selected track.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    fn save_selected_track(&self, track: &str) -> Result<(), StorageError>;
}

/// Simple in-memory key-value store for tests and session-only selection.
#[derive(Clone, Default)]
pub struct InMemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl TrackPreferenceRepository for InMemoryPreferences {
    fn load_selected_track(&self) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.get(SELECTED_TRACK_KEY).cloned())
    }

    fn save_selected_track(&self, track: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard.insert(SELECTED_TRACK_KEY.to_owned(), track.to_owned());
        Ok(())
    }
}

/// Preference adapter behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub preferences: Arc<dyn TrackPreferenceRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            preferences: Arc::new(InMemoryPreferences::new()),
        }
    }

    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            preferences: Arc::new(JsonFilePreferences::new(path)),
        }
    }

    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn local_storage() -> Self {
        Self {
            preferences: Arc::new(crate::local_storage::LocalStoragePreferences::new()),
        }
    }
}
