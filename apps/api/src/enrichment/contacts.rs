//! Contact extraction — scans a raw listing's structured fields and free-text
//! description for candidate emails, phone numbers and the employer website.
//!
//! The patterns are heuristic: an ID number inside a description can match the
//! phone shape, and nothing here verifies deliverability. Candidates are
//! deduplicated by normalized value, first occurrence wins.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::enriched::{ContactCandidate, ContactLabel};
use crate::models::listing::RawListing;

lazy_static! {
    // Email pattern - RFC 5322 simplified
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b").unwrap();

    // Optional leading "+", digit on both ends, 6+ separator-or-digit chars between
    static ref PHONE_REGEX: Regex = Regex::new(r"\+?\d[\d\s().-]{6,}\d").unwrap();
}

/// Phones shorter than this after whitespace normalization are discarded.
const MIN_PHONE_LEN: usize = 8;

/// Dedup key for the (at most one) website candidate.
const WEBSITE_KEY: &str = "website";

/// Extracts an ordered, deduplicated set of contact candidates from one
/// listing: all emails first (explicit field, then mailto apply link, then
/// description matches), then phones, then the website. A listing with no
/// extractable contacts yields an empty vec.
pub fn extract_contacts(listing: &RawListing) -> Vec<ContactCandidate> {
    let mut contacts: IndexMap<String, ContactCandidate> = IndexMap::new();

    if let Some(email) = listing.employer_email.as_deref() {
        insert_email(&mut contacts, email);
    }
    if let Some(addr) = listing.job_apply_link.as_deref().and_then(mailto_address) {
        insert_email(&mut contacts, addr);
    }

    let description = listing.job_description.as_deref().unwrap_or("");
    for m in EMAIL_REGEX.find_iter(description) {
        insert_email(&mut contacts, m.as_str());
    }

    for m in PHONE_REGEX.find_iter(description) {
        let phone = normalize_phone(m.as_str());
        if phone.len() < MIN_PHONE_LEN {
            continue;
        }
        contacts.entry(phone.clone()).or_insert(ContactCandidate {
            label: ContactLabel::Phone,
            value: phone,
        });
    }

    if let Some(site) = listing
        .employer_website
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        contacts
            .entry(WEBSITE_KEY.to_string())
            .or_insert(ContactCandidate {
                label: ContactLabel::Website,
                value: with_scheme(site.trim()),
            });
    }

    contacts.into_values().collect()
}

fn insert_email(contacts: &mut IndexMap<String, ContactCandidate>, raw: &str) {
    let email = raw.trim().to_lowercase();
    // Should not happen given the match pattern, but the explicit field is
    // caller-supplied free text.
    if !email.contains('@') {
        return;
    }
    let label = if email.contains("hr") {
        ContactLabel::HrEmail
    } else {
        ContactLabel::ContactEmail
    };
    contacts.entry(email.clone()).or_insert(ContactCandidate {
        label,
        value: email,
    });
}

/// Strips a `mailto:` apply link down to the bare address, dropping any
/// `?subject=...` suffix. Returns `None` for non-mailto links.
fn mailto_address(link: &str) -> Option<&str> {
    let rest = link.strip_prefix("mailto:")?;
    let addr = rest.split('?').next().unwrap_or(rest);
    (!addr.is_empty()).then_some(addr)
}

/// Collapses internal whitespace runs to single spaces and trims.
fn normalize_phone(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn with_scheme(site: &str) -> String {
    if site.starts_with("http://") || site.starts_with("https://") {
        site.to_string()
    } else {
        format!("https://{site}")
    }
}
