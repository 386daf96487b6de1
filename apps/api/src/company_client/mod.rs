//! Company directory client — best-effort enrichment lookup.
//!
//! Lookups never fail outward: any transport error, non-2xx status, malformed
//! body or empty match list degrades to `None` and the listing simply ships
//! without an insight.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::models::company::{CompanyInsight, CompanySuggestion};

const LINKEDIN_BASE_URL: &str = "https://www.linkedin.com/company/";
const TWITTER_BASE_URL: &str = "https://twitter.com/";

/// The company-directory seam. Carried in `AppState` as
/// `Arc<dyn CompanyLookup>` so tests can swap in a stub.
#[async_trait]
pub trait CompanyLookup: Send + Sync {
    /// Best-match profile for a company name, or `None` when the directory
    /// has no usable answer.
    async fn lookup(&self, name: &str) -> Option<CompanyInsight>;
}

pub struct CompanyClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CompanyClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }

    async fn suggest(&self, name: &str) -> Result<Vec<CompanySuggestion>, reqwest::Error> {
        let mut request = self.client.get(&self.base_url).query(&[("query", name)]);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?.error_for_status()?;
        response.json().await
    }
}

#[async_trait]
impl CompanyLookup for CompanyClient {
    async fn lookup(&self, name: &str) -> Option<CompanyInsight> {
        match self.suggest(name).await {
            Ok(suggestions) => match suggestions.into_iter().next() {
                Some(best) => Some(into_insight(best, name)),
                None => {
                    debug!(company = name, "Directory returned no matches");
                    None
                }
            },
            Err(e) => {
                warn!(company = name, error = %e, "Company lookup failed, continuing without insight");
                None
            }
        }
    }
}

/// Maps the first (authoritative) suggestion into the insight shape. Social
/// handles become full profile URLs; absolute URLs pass through.
fn into_insight(suggestion: CompanySuggestion, fallback_name: &str) -> CompanyInsight {
    CompanyInsight {
        name: suggestion
            .name
            .unwrap_or_else(|| fallback_name.to_string()),
        domain: suggestion.domain,
        description: suggestion.description,
        logo: suggestion.logo,
        location: suggestion.location,
        linkedin: suggestion
            .linkedin
            .map(|handle| profile_url(LINKEDIN_BASE_URL, handle)),
        twitter: suggestion
            .twitter
            .map(|handle| profile_url(TWITTER_BASE_URL, handle)),
    }
}

fn profile_url(base: &str, handle: String) -> String {
    if handle.starts_with("http://") || handle.starts_with("https://") {
        handle
    } else {
        format!("{base}{handle}")
    }
}
