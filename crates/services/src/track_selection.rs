use std::sync::Arc;

use odyssey_core::model::{Catalog, TrackName};
use storage::TrackPreferenceRepository;
use tracing::debug;

/// Resolves and persists the selected track.
///
/// Storage failures never escape: a failed read counts as "nothing stored"
/// and a failed write leaves the selection in memory only.
#[derive(Clone)]
pub struct TrackSelectionService {
    catalog: Arc<Catalog>,
    repo: Arc<dyn TrackPreferenceRepository>,
}

impl TrackSelectionService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, repo: Arc<dyn TrackPreferenceRepository>) -> Self {
        Self { catalog, repo }
    }

    /// Tracks offered by the selector, in catalog order.
    #[must_use]
    pub fn tracks(&self) -> Vec<TrackName> {
        self.catalog.tracks()
    }

    /// The persisted track if it still exists, otherwise the first track.
    #[must_use]
    pub fn initial_track(&self) -> TrackName {
        let stored = match self.repo.load_selected_track() {
            Ok(stored) => stored,
            Err(err) => {
                debug!(%err, "selected track unavailable, using default");
                None
            }
        };
        self.catalog.resolve_track(stored.as_deref())
    }

    pub fn select_track(&self, track: &TrackName) {
        if let Err(err) = self.repo.save_selected_track(track.as_str()) {
            debug!(%err, track = %track, "could not persist selected track");
        }
    }
}
