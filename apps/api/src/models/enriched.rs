use serde::{Deserialize, Serialize};

use crate::models::company::CompanyInsight;

/// Classification of an extracted contact identifier.
/// Serialized as the human-readable label shown to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactLabel {
    #[serde(rename = "HR email")]
    HrEmail,
    #[serde(rename = "Contact email")]
    ContactEmail,
    #[serde(rename = "Phone")]
    Phone,
    #[serde(rename = "Company website")]
    Website,
}

/// A single contact identifier pulled out of a listing's free text or
/// structured fields. Values are normalized but never validated — false
/// positives are possible and accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCandidate {
    pub label: ContactLabel,
    pub value: String,
}

/// The canonical output unit: one normalized, contact- and
/// company-enriched job listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub is_remote: bool,
    pub employment_type: Option<String>,
    pub salary: Option<String>,
    pub apply_link: Option<String>,
    pub description: Option<String>,
    pub highlights: Vec<String>,
    /// Human-readable posting age, e.g. "Posted 2 days ago".
    pub posted: Option<String>,
    pub contacts: Vec<ContactCandidate>,
    pub company_insight: Option<CompanyInsight>,
}
