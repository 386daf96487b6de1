use anyhow::{Context, Result};

const DEFAULT_COMPANY_API_URL: &str = "https://autocomplete.clearbit.com/v1/companies/suggest";

/// Application configuration loaded from environment variables.
/// All keys are optional: requests may carry their own search credential,
/// and the company directory works keyless.
#[derive(Debug, Clone)]
pub struct Config {
    pub search_api_key: Option<String>,
    pub company_api_url: String,
    pub company_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            search_api_key: optional_env("SEARCH_API_KEY"),
            company_api_url: std::env::var("COMPANY_API_URL")
                .unwrap_or_else(|_| DEFAULT_COMPANY_API_URL.to_string()),
            company_api_key: optional_env("COMPANY_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
