
use async_trait::async_trait;
use odyssey_core::model::CourseRecord;
use reqwest::Client;
use tracing::debug;

use crate::error::ProgressFetchError;
use crate::queries::{GET_USER_PROGRESS, GraphqlRequest, GraphqlResponse, UserProgress};

/// Fixed GraphQL endpoint serving Odyssey progress.
pub const PROGRESS_ENDPOINT: &str = "https://graphql.api.apollographql.com/api/graphql";

/// Anything that can report the current user's course records.
///
/// Futures are not `Send`: the widget runs on a single UI thread.
#[async_trait(?Send)]
pub trait ProgressSource {
    /// Fetch the signed-in user's course records.
    ///
    /// # Errors
    ///
    /// Returns `ProgressFetchError` for transport failures, non-2xx responses,
    /// undecodable bodies, or a response without a user.
    async fn fetch_progress(&self) -> Result<Vec<CourseRecord>, ProgressFetchError>;
}

#[derive(Clone, Debug)]
pub struct ProgressClientConfig {
    pub endpoint: String,
    /// Raw `Cookie` header value. Browsers attach the session themselves,
    /// so this only matters on native targets.
    pub session_cookie: Option<String>,
}

impl Default for ProgressClientConfig {
    fn default() -> Self {
        Self {
            endpoint: PROGRESS_ENDPOINT.to_string(),
            session_cookie: None,
        }
    }
}

#[derive(Clone)]
pub struct GraphqlProgressClient {
    client: Client,
    config: ProgressClientConfig,
}

impl GraphqlProgressClient {
    #[must_use]
    pub fn new(config: ProgressClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl ProgressSource for GraphqlProgressClient {
    async fn fetch_progress(&self) -> Result<Vec<CourseRecord>, ProgressFetchError> {
        let payload = GraphqlRequest {
            query: GET_USER_PROGRESS,
        };
        let request = self.client.post(&self.config.endpoint).json(&payload);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        #[cfg(not(target_arch = "wasm32"))]
        let request = match self.config.session_cookie.as_deref() {
            Some(cookie) => request.header(reqwest::header::COOKIE, cookie),
            None => request,
        };

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ProgressFetchError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let user = parse_progress_response(&body)?;
        let courses = user.courses.unwrap_or_default();
        debug!(
            user_id = user.id.as_deref().unwrap_or("?"),
            courses = courses.len(),
            "fetched course progress"
        );
        Ok(courses)
    }
}

/// Extract the user record from a raw GraphQL response body.
///
/// # Errors
///
/// Returns `ProgressFetchError::Decode` for malformed JSON and
/// `ProgressFetchError::MissingUser` when `data.me` is absent, null or not a
/// `User`.
pub fn parse_progress_response(body: &str) -> Result<UserProgress, ProgressFetchError> {
    let response: GraphqlResponse = serde_json::from_str(body)?;
    response
        .data
        .and_then(|data| data.me)
        .filter(UserProgress::is_user)
        .ok_or(ProgressFetchError::MissingUser)
}
