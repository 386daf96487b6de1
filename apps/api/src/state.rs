use std::sync::Arc;

use crate::company_client::CompanyLookup;
use crate::config::Config;
use crate::search_client::JobSearch;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Job-search provider. Trait object so tests can swap in a stub.
    pub search: Arc<dyn JobSearch>,
    /// Company directory lookup; failures degrade to "no insight".
    pub companies: Arc<dyn CompanyLookup>,
    pub config: Config,
}
