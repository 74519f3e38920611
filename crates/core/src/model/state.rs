use crate::model::ids::TrackName;
use crate::model::record::CourseRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    Loading,
    Failed,
    Ready,
}

/// Mutable state of one mounted widget.
///
/// Created when the widget mounts and dropped with it; only the selected
/// track outlives it (through the preference store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    selected_track: TrackName,
    records: Vec<CourseRecord>,
    loading: bool,
    error: Option<String>,
}

impl WidgetState {
    /// Fresh state for a mount that has not fetched yet.
    #[must_use]
    pub fn loading(selected_track: TrackName) -> Self {
        Self {
            selected_track,
            records: Vec::new(),
            loading: true,
            error: None,
        }
    }

    #[must_use]
    pub fn selected_track(&self) -> &TrackName {
        &self.selected_track
    }

    #[must_use]
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> WidgetPhase {
        if self.loading {
            WidgetPhase::Loading
        } else if self.error.is_some() {
            WidgetPhase::Failed
        } else {
            WidgetPhase::Ready
        }
    }

    pub fn apply_records(&mut self, records: Vec<CourseRecord>) {
        self.records = records;
        self.loading = false;
        self.error = None;
    }

    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.records.clear();
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn select_track(&mut self, track: TrackName) {
        self.selected_track = track;
    }
}
