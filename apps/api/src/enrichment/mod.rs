//! Enrichment pipeline: raw provider records in, ordered enriched listings
//! out. Each retained listing is normalized and, when it names an employer,
//! augmented with a company-directory insight; the per-listing work runs
//! concurrently.

pub mod contacts;
pub mod normalize;

use futures::future::join_all;
use tracing::info;

use crate::company_client::CompanyLookup;
use crate::enrichment::normalize::{normalize_listing, UNKNOWN_COMPANY};
use crate::models::enriched::EnrichedListing;
use crate::models::listing::RawListing;

/// Fan-out cap per request. Listings beyond this are silently dropped,
/// bounding outbound lookup volume.
pub const MAX_LISTINGS: usize = 12;

/// Enriches up to [`MAX_LISTINGS`] raw listings concurrently. Output order
/// equals the truncated input order regardless of lookup completion order;
/// a failed lookup leaves that one listing without an insight.
pub async fn enrich_listings(
    raw: Vec<RawListing>,
    fallback_title: &str,
    companies: &dyn CompanyLookup,
) -> Vec<EnrichedListing> {
    if raw.is_empty() {
        return Vec::new();
    }

    let input_count = raw.len();
    let tasks: Vec<_> = raw
        .into_iter()
        .take(MAX_LISTINGS)
        .map(|listing| async move {
            let mut enriched = normalize_listing(listing, fallback_title);
            if enriched.company != UNKNOWN_COMPANY {
                enriched.company_insight = companies.lookup(&enriched.company).await;
            }
            enriched
        })
        .collect();

    // join_all yields results in task order, not completion order
    let enriched = join_all(tasks).await;

    info!(
        input_count,
        enriched_count = enriched.len(),
        "Listing enrichment complete"
    );
    enriched
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::models::company::CompanyInsight;

    /// Lookup stub whose latency grows as the listing index shrinks, so
    /// earlier listings finish last. "Flaky Corp" simulates a failed lookup.
    struct DelayedLookup {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CompanyLookup for DelayedLookup {
        async fn lookup(&self, name: &str) -> Option<CompanyInsight> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let index: u64 = name
                .rsplit(' ')
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(200u64.saturating_sub(index * 10))).await;
            if name == "Flaky Corp" {
                return None;
            }
            Some(CompanyInsight {
                name: name.to_string(),
                domain: Some("example.com".to_string()),
                description: None,
                logo: None,
                location: None,
                linkedin: None,
                twitter: None,
            })
        }
    }

    fn lookup() -> (DelayedLookup, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            DelayedLookup {
                calls: calls.clone(),
            },
            calls,
        )
    }

    fn listing(id: usize, employer: Option<&str>) -> RawListing {
        RawListing {
            job_id: Some(format!("job-{id}")),
            employer_name: employer.map(String::from),
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_output_is_capped_and_ordered_despite_reordered_completions() {
        let raw: Vec<RawListing> = (0..15)
            .map(|i| listing(i, Some(&format!("Corp {i}"))))
            .collect();
        let (companies, calls) = lookup();

        let enriched = enrich_listings(raw, "Backend Developer", &companies).await;

        assert_eq!(enriched.len(), MAX_LISTINGS);
        for (i, job) in enriched.iter().enumerate() {
            assert_eq!(job.id, format!("job-{i}"));
            let insight = job.company_insight.as_ref().unwrap();
            assert_eq!(insight.name, format!("Corp {i}"));
        }
        assert_eq!(calls.load(Ordering::SeqCst), MAX_LISTINGS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_company_skips_the_lookup() {
        let raw = vec![listing(0, None), listing(1, Some("Corp 1"))];
        let (companies, calls) = lookup();

        let enriched = enrich_listings(raw, "Backend Developer", &companies).await;

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].company, UNKNOWN_COMPANY);
        assert!(enriched[0].company_insight.is_none());
        assert!(enriched[1].company_insight.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_failed_lookup_leaves_the_rest_intact() {
        let raw = vec![
            listing(0, Some("Corp 0")),
            listing(1, Some("Flaky Corp")),
            listing(2, Some("Corp 2")),
        ];
        let (companies, _calls) = lookup();

        let enriched = enrich_listings(raw, "Backend Developer", &companies).await;

        assert!(enriched[0].company_insight.is_some());
        assert!(enriched[1].company_insight.is_none());
        assert!(enriched[2].company_insight.is_some());
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_lookups() {
        let (companies, calls) = lookup();
        let enriched = enrich_listings(Vec::new(), "Backend Developer", &companies).await;
        assert!(enriched.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
