use std::sync::Arc;

use odyssey_core::model::Catalog;
use storage::Storage;

use crate::progress_client::{GraphqlProgressClient, ProgressClientConfig, ProgressSource};
use crate::track_selection::TrackSelectionService;
use crate::widget_session::WidgetSession;

/// Assembles widget-facing services from a storage backend and a progress source.
#[derive(Clone)]
pub struct WidgetServices {
    catalog: Arc<Catalog>,
    selection: TrackSelectionService,
    progress: Arc<dyn ProgressSource>,
}

impl WidgetServices {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        storage: &Storage,
        progress: Arc<dyn ProgressSource>,
    ) -> Self {
        let selection = TrackSelectionService::new(
            Arc::clone(&catalog),
            Arc::clone(&storage.preferences),
        );
        Self {
            catalog,
            selection,
            progress,
        }
    }

    /// Built-in catalog fetching from the live GraphQL endpoint.
    #[must_use]
    pub fn odyssey(storage: &Storage, config: ProgressClientConfig) -> Self {
        let catalog = Arc::new(Catalog::odyssey().clone());
        let client: Arc<dyn ProgressSource> = Arc::new(GraphqlProgressClient::new(config));
        Self::new(catalog, storage, client)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn track_selection(&self) -> TrackSelectionService {
        self.selection.clone()
    }

    /// New session for a fresh mount; reads the persisted track.
    #[must_use]
    pub fn start_session(&self) -> WidgetSession {
        WidgetSession::new(
            Arc::clone(&self.catalog),
            self.selection.clone(),
            Arc::clone(&self.progress),
        )
    }
}
