use axum::{extract::State, Json};
use serde::Serialize;

use crate::enrichment::enrich_listings;
use crate::errors::AppError;
use crate::jobs::query::{build_search_query, validate, SearchJobsRequest};
use crate::models::enriched::EnrichedListing;
use crate::search_client::SearchError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchJobsResponse {
    pub jobs: Vec<EnrichedListing>,
}

/// POST /api/v1/jobs/search
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Json(req): Json<SearchJobsRequest>,
) -> Result<Json<SearchJobsResponse>, AppError> {
    validate(&req)?;

    let api_key = req
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| state.config.search_api_key.clone())
        .ok_or(AppError::MissingCredential)?;

    let query = build_search_query(&req);
    let raw = state
        .search
        .search(&query, &api_key)
        .await
        .map_err(|e| match e {
            SearchError::Api { status, message } => AppError::Upstream { status, message },
            SearchError::Http(e) => AppError::Internal(e.into()),
        })?;

    let jobs = enrich_listings(raw, req.job_profile.trim(), state.companies.as_ref()).await;
    Ok(Json(SearchJobsResponse { jobs }))
}
