use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::repository::{SELECTED_TRACK_KEY, StorageError, TrackPreferenceRepository};

/// Key-value file standing in for browser `localStorage` on native targets.
///
/// The file holds a flat JSON object of string keys to string values.
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
}

impl JsonFilePreferences {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(StorageError::Io(err.to_string())),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StorageError::Io(err.to_string()))?;
        }

        let json = serde_json::to_string_pretty(map)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let tmp_path = self.path.with_extension("tmp");
        let mut file =
            fs::File::create(&tmp_path).map_err(|err| StorageError::Io(err.to_string()))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|err| StorageError::Io(err.to_string()))?;

        fs::rename(&tmp_path, &self.path).map_err(|err| StorageError::Io(err.to_string()))
    }
}

impl TrackPreferenceRepository for JsonFilePreferences {
    fn load_selected_track(&self) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(SELECTED_TRACK_KEY))
    }

    fn save_selected_track(&self, track: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(SELECTED_TRACK_KEY.to_owned(), track.to_owned());
        self.write_map(&map)
    }
}
