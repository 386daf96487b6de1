use serde::Deserialize;

/// One job record as returned by the search provider.
///
/// The provider guarantees nothing: every field is optional and a record may
/// be entirely sparse. Unknown fields are ignored. Field-name fallbacks
/// (e.g. `min_salary` vs `min`) are resolved in the normalizer, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub employer_website: Option<String>,
    #[serde(default)]
    pub employer_email: Option<String>,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_state: Option<String>,
    #[serde(default)]
    pub job_country: Option<String>,
    #[serde(default)]
    pub job_is_remote: Option<bool>,
    #[serde(default)]
    pub job_employment_type: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub job_apply_link: Option<String>,
    #[serde(default)]
    pub job_highlights: Option<JobHighlights>,
    #[serde(default)]
    pub job_salary: Option<SalaryInfo>,
    /// ISO 8601 datetime, preferred posting-time representation.
    #[serde(default)]
    pub job_posted_at_datetime_utc: Option<String>,
    /// Loosely formatted datetime string, second choice.
    #[serde(default)]
    pub job_posted_at: Option<String>,
    /// Epoch seconds, last resort.
    #[serde(default)]
    pub job_posted_at_timestamp: Option<i64>,
}

/// Structured highlight buckets. The provider capitalizes these keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobHighlights {
    #[serde(rename = "Qualifications", default)]
    pub qualifications: Option<Vec<String>>,
    #[serde(rename = "Responsibilities", default)]
    pub responsibilities: Option<Vec<String>>,
    #[serde(rename = "Benefits", default)]
    pub benefits: Option<Vec<String>>,
}

/// Salary sub-record. The provider emits amounts and the period under one of
/// two naming conventions; both are kept here and resolved primary-first in
/// the normalizer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalaryInfo {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    pub max_salary: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub salary_period: Option<String>,
}
