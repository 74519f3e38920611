#![forbid(unsafe_code)]

pub mod error;
pub mod progress_client;
pub mod queries;
pub mod track_selection;
pub mod widget_services;
pub mod widget_session;

pub use error::ProgressFetchError;
pub use progress_client::{
    GraphqlProgressClient, PROGRESS_ENDPOINT, ProgressClientConfig, ProgressSource,
    parse_progress_response,
};
pub use queries::{GET_USER_PROGRESS, UserProgress};
pub use track_selection::TrackSelectionService;
pub use widget_services::WidgetServices;
pub use widget_session::WidgetSession;
