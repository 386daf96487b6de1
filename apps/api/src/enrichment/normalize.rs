//! Listing normalization — maps one raw provider record into the canonical
//! `EnrichedListing` shape: salary formatting, posting-age formatting,
//! highlight consolidation, and the id/title/company fallbacks.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::enrichment::contacts::extract_contacts;
use crate::models::enriched::EnrichedListing;
use crate::models::listing::{JobHighlights, RawListing, SalaryInfo};

/// Placeholder company name for listings without an employer name.
/// The company lookup is never called with this value.
pub const UNKNOWN_COMPANY: &str = "Unknown company";

const MAX_HIGHLIGHTS: usize = 6;
const DEFAULT_CURRENCY: &str = "INR";

/// Normalizes one raw listing. `fallback_title` is the originally requested
/// job profile, used when the record omits its own title. The company insight
/// is left unset; attaching it is the orchestrator's job.
pub fn normalize_listing(raw: RawListing, fallback_title: &str) -> EnrichedListing {
    let contacts = extract_contacts(&raw);

    let id = non_blank(raw.job_id.as_deref()).unwrap_or_else(|| Uuid::new_v4().to_string());
    let title =
        non_blank(raw.job_title.as_deref()).unwrap_or_else(|| fallback_title.to_string());
    let company =
        non_blank(raw.employer_name.as_deref()).unwrap_or_else(|| UNKNOWN_COMPANY.to_string());

    let salary = raw.job_salary.as_ref().and_then(format_salary);
    let posted = resolve_posted_date(&raw).map(|date| format_posted_age(date, Utc::now()));
    let highlights = collect_highlights(raw.job_highlights.as_ref());

    EnrichedListing {
        id,
        title,
        company,
        city: raw.job_city,
        state: raw.job_state,
        country: raw.job_country,
        is_remote: raw.job_is_remote.unwrap_or(false),
        employment_type: raw.job_employment_type,
        salary,
        apply_link: raw.job_apply_link,
        description: raw.job_description,
        highlights,
        posted,
        contacts,
        company_insight: None,
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

// ────────────────────────────────────────────────────────────────────────────
// Salary
// ────────────────────────────────────────────────────────────────────────────

/// Formats a salary range, e.g. "₹12,50,000 - ₹18,00,000 / YEAR".
/// Returns `None` when neither bound resolves to a non-zero amount.
fn format_salary(salary: &SalaryInfo) -> Option<String> {
    let currency = salary.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
    let min = resolve_amount(salary.min_salary, salary.min);
    let max = resolve_amount(salary.max_salary, salary.max);
    let period = salary.period.as_deref().or(salary.salary_period.as_deref());

    let range = match (min, max) {
        (Some(min), Some(max)) => format!(
            "{} - {}",
            format_currency(min, currency),
            format_currency(max, currency)
        ),
        (Some(value), None) | (None, Some(value)) => format_currency(value, currency),
        (None, None) => return None,
    };

    Some(match period {
        Some(period) => format!("{range} / {period}"),
        None => range,
    })
}

/// Primary field name first, alternate second. Zero counts as absent.
fn resolve_amount(primary: Option<f64>, alternate: Option<f64>) -> Option<f64> {
    primary
        .filter(|v| *v != 0.0)
        .or_else(|| alternate.filter(|v| *v != 0.0))
}

/// Localized integer rendering: Indian 2-2-3 grouping for INR, Western
/// 3-digit grouping otherwise, with a currency-symbol map.
fn format_currency(amount: f64, currency: &str) -> String {
    let rounded = amount.round().max(0.0) as u64;
    let grouped = if currency == "INR" {
        group_indian(rounded)
    } else {
        group_western(rounded)
    };
    match currency {
        "INR" => format!("₹{grouped}"),
        "USD" => format!("${grouped}"),
        "EUR" => format!("€{grouped}"),
        "GBP" => format!("£{grouped}"),
        other => format!("{other} {grouped}"),
    }
}

fn group_western(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let head: Vec<char> = head.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(head[start..end].iter().collect());
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

// ────────────────────────────────────────────────────────────────────────────
// Posting age
// ────────────────────────────────────────────────────────────────────────────

/// Picks the first posting-time representation that parses: ISO datetime,
/// then the loose string field, then epoch seconds.
fn resolve_posted_date(raw: &RawListing) -> Option<DateTime<Utc>> {
    if let Some(date) = raw
        .job_posted_at_datetime_utc
        .as_deref()
        .and_then(parse_datetime)
    {
        return Some(date);
    }
    if let Some(date) = raw.job_posted_at.as_deref().and_then(parse_datetime) {
        return Some(date);
    }
    raw.job_posted_at_timestamp
        .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Relative age under a week, short calendar date from 7 days on.
pub fn format_posted_age(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(posted);
    let hours = elapsed.num_hours();
    if hours < 24 {
        return if hours <= 1 {
            "Posted less than an hour ago".to_string()
        } else {
            format!("Posted {hours}h ago")
        };
    }
    match elapsed.num_days() {
        1 => "Posted yesterday".to_string(),
        days @ 2..=6 => format!("Posted {days} days ago"),
        _ => posted.format("%b %-d, %Y").to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Highlights
// ────────────────────────────────────────────────────────────────────────────

/// Qualifications, then responsibilities, then benefits, capped at 6 total.
fn collect_highlights(highlights: Option<&JobHighlights>) -> Vec<String> {
    let Some(h) = highlights else {
        return Vec::new();
    };
    h.qualifications
        .iter()
        .flatten()
        .chain(h.responsibilities.iter().flatten())
        .chain(h.benefits.iter().flatten())
        .take(MAX_HIGHLIGHTS)
        .cloned()
        .collect()
}
