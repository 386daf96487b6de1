//! Search provider client — the single point of entry for job-search calls.
//!
//! Wraps the provider's keyed HTTP search endpoint. The credential is passed
//! per call because requests may carry their own key, overriding the
//! process-wide one.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::listing::RawListing;

const JSEARCH_API_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_API_HOST: &str = "jsearch.p.rapidapi.com";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Provider query parameters, already resolved from the caller's request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub page: u32,
    pub num_pages: u32,
    pub remote_jobs_only: bool,
    pub job_requirements: Option<&'static str>,
}

/// The job-search provider seam. Carried in `AppState` as `Arc<dyn JobSearch>`
/// so tests can swap in a stub.
#[async_trait]
pub trait JobSearch: Send + Sync {
    async fn search(
        &self,
        query: &SearchQuery,
        api_key: &str,
    ) -> Result<Vec<RawListing>, SearchError>;
}

pub struct SearchClient {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Option<Vec<RawListing>>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Option<String>,
}

impl SearchClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobSearch for SearchClient {
    async fn search(
        &self,
        query: &SearchQuery,
        api_key: &str,
    ) -> Result<Vec<RawListing>, SearchError> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.query.clone()),
            ("page", query.page.to_string()),
            ("num_pages", query.num_pages.to_string()),
        ];
        if query.remote_jobs_only {
            params.push(("remote_jobs_only", "true".to_string()));
        }
        if let Some(requirements) = query.job_requirements {
            params.push(("job_requirements", requirements.to_string()));
        }

        let response = self
            .client
            .get(JSEARCH_API_URL)
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", JSEARCH_API_HOST)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the provider's message field
            let message = serde_json::from_str::<ProviderError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or(body);
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = response.json().await?;
        let listings = parsed.data.unwrap_or_default();
        debug!(count = listings.len(), "Search provider returned listings");
        Ok(listings)
    }
}
