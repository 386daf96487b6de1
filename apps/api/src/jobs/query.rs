//! Inbound request shape, validation and provider-query construction.

use serde::Deserialize;

use crate::errors::AppError;
use crate::search_client::SearchQuery;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geography {
    #[default]
    India,
    Usa,
}

impl Geography {
    fn country(self) -> &'static str {
        match self {
            Geography::India => "India",
            Geography::Usa => "USA",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Any,
    NoExperience,
    #[serde(rename = "under_3_years_experience")]
    UnderThreeYears,
    #[serde(rename = "more_than_3_years_experience")]
    MoreThanThreeYears,
    NoDegree,
}

impl ExperienceLevel {
    /// Provider `job_requirements` parameter value; `any` sends nothing.
    fn job_requirements(self) -> Option<&'static str> {
        match self {
            ExperienceLevel::Any => None,
            ExperienceLevel::NoExperience => Some("no_experience"),
            ExperienceLevel::UnderThreeYears => Some("under_3_years_experience"),
            ExperienceLevel::MoreThanThreeYears => Some("more_than_3_years_experience"),
            ExperienceLevel::NoDegree => Some("no_degree"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStyle {
    #[default]
    Any,
    Remote,
    Onsite,
    Hybrid,
}

/// The search form as posted by the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchJobsRequest {
    #[serde(default)]
    pub job_profile: String,
    #[serde(default)]
    pub geography: Geography,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub remote: WorkStyle,
    /// Inline provider credential; falls back to the configured one.
    #[serde(default)]
    pub api_key: Option<String>,
}

pub fn validate(req: &SearchJobsRequest) -> Result<(), AppError> {
    if req.job_profile.trim().is_empty() {
        return Err(AppError::Validation("jobProfile is required".to_string()));
    }
    if req.location.trim().is_empty() {
        return Err(AppError::Validation("location is required".to_string()));
    }
    Ok(())
}

/// Builds the provider's free-text query plus filter parameters.
pub fn build_search_query(req: &SearchJobsRequest) -> SearchQuery {
    let query = format!(
        "{} jobs in {}, {}",
        req.job_profile.trim(),
        req.location.trim(),
        req.geography.country()
    );
    SearchQuery {
        query,
        page: 1,
        num_pages: 1,
        remote_jobs_only: req.remote == WorkStyle::Remote,
        job_requirements: req.experience_level.job_requirements(),
    }
}
