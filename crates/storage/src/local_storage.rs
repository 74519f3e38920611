use crate::repository::{SELECTED_TRACK_KEY, StorageError, TrackPreferenceRepository};

/// Browser `window.localStorage` adapter.
///
/// The handle is looked up on every call; pages may revoke storage access
/// at any point.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))
    }
}

impl TrackPreferenceRepository for LocalStoragePreferences {
    fn load_selected_track(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(SELECTED_TRACK_KEY)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn save_selected_track(&self, track: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(SELECTED_TRACK_KEY, track)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }
}
