use serde::{Deserialize, Serialize};

/// Best-match company profile from the directory service, with social
/// handles already expanded to full profile URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInsight {
    pub name: String,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

/// One entry of the directory's suggest response. Richer directories also
/// send description, location and raw social handles; sparse ones omit them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanySuggestion {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}
