use std::sync::Arc;

use odyssey_core::model::{
    Catalog, CourseRecord, TrackName, TrackProgress, WidgetState, track_progress,
};
use tracing::{debug, info, warn};

use crate::error::ProgressFetchError;
use crate::progress_client::ProgressSource;
use crate::track_selection::TrackSelectionService;

/// State and collaborators of one mounted widget.
pub struct WidgetSession {
    catalog: Arc<Catalog>,
    selection: TrackSelectionService,
    progress: Arc<dyn ProgressSource>,
    state: WidgetState,
}

impl WidgetSession {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        selection: TrackSelectionService,
        progress: Arc<dyn ProgressSource>,
    ) -> Self {
        let track = selection.initial_track();
        info!(track = %track, "widget session started");
        Self {
            catalog,
            selection,
            progress,
            state: WidgetState::loading(track),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    #[must_use]
    pub fn tracks(&self) -> Vec<TrackName> {
        self.selection.tracks()
    }

    /// Handle to the progress source, for callers that must not hold the
    /// session borrowed across the fetch.
    #[must_use]
    pub fn progress_source(&self) -> Arc<dyn ProgressSource> {
        Arc::clone(&self.progress)
    }

    pub fn apply_fetch(&mut self, outcome: Result<Vec<CourseRecord>, ProgressFetchError>) {
        match outcome {
            Ok(records) => {
                debug!(records = records.len(), "course progress loaded");
                self.state.apply_records(records);
            }
            Err(err) => {
                warn!(%err, "could not fetch course progress");
                self.state.apply_error(err.to_string());
            }
        }
    }

    /// Fetch once and apply the outcome.
    pub async fn load(&mut self) {
        let source = self.progress_source();
        let outcome = source.fetch_progress().await;
        self.apply_fetch(outcome);
    }

    /// Switch tracks and persist the choice.
    pub fn select_track(&mut self, track: TrackName) {
        self.selection.select_track(&track);
        self.state.select_track(track);
    }

    #[must_use]
    pub fn track_progress(&self) -> TrackProgress {
        track_progress(
            &self.catalog,
            self.state.selected_track(),
            self.state.records(),
        )
    }
}
