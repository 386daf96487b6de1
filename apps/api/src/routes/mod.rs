pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jobs/search", post(handlers::handle_search_jobs))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::company_client::CompanyLookup;
    use crate::config::Config;
    use crate::models::company::CompanyInsight;
    use crate::models::listing::RawListing;
    use crate::search_client::{JobSearch, SearchError, SearchQuery};

    struct StubSearch {
        listings: Vec<RawListing>,
        error: Option<(u16, String)>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl JobSearch for StubSearch {
        async fn search(
            &self,
            _query: &SearchQuery,
            _api_key: &str,
        ) -> Result<Vec<RawListing>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some((status, message)) = &self.error {
                return Err(SearchError::Api {
                    status: *status,
                    message: message.clone(),
                });
            }
            Ok(self.listings.clone())
        }
    }

    struct StubCompanies {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CompanyLookup for StubCompanies {
        async fn lookup(&self, name: &str) -> Option<CompanyInsight> {
            self.calls.fetch_add(1, Ordering::SeqCst);
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

    struct TestApp {
        router: Router,
        search_calls: Arc<AtomicUsize>,
        company_calls: Arc<AtomicUsize>,
    }

    fn test_config(search_api_key: Option<&str>) -> Config {
        Config {
            search_api_key: search_api_key.map(String::from),
            company_api_url: "http://localhost:0".to_string(),
            company_api_key: None,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn setup(listings: Vec<RawListing>, error: Option<(u16, String)>) -> TestApp {
        let search_calls = Arc::new(AtomicUsize::new(0));
        let company_calls = Arc::new(AtomicUsize::new(0));
        let state = AppState {
            search: Arc::new(StubSearch {
                listings,
                error,
                calls: search_calls.clone(),
            }),
            companies: Arc::new(StubCompanies {
                calls: company_calls.clone(),
            }),
            config: test_config(Some("test-key")),
        };
        TestApp {
            router: build_router(state),
            search_calls,
            company_calls,
        }
    }

    fn search_request(body: serde_json::Value) -> Request<Body> {
        Request::post("/api/v1/jobs/search")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_returns_200() {
        let app = setup(Vec::new(), None);

        let response = app
            .router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn search_enriches_all_provider_listings() {
        let acme = RawListing {
            job_id: Some("acme-1".to_string()),
            job_title: Some("Backend Developer".to_string()),
            employer_name: Some("Acme Corp".to_string()),
            job_description: Some("Great role. Questions? contact hr@acme.com".to_string()),
            ..Default::default()
        };
        let other = RawListing {
            job_id: Some("other-1".to_string()),
            employer_name: Some("Globex".to_string()),
            ..Default::default()
        };
        let nameless = RawListing {
            job_id: Some("nameless-1".to_string()),
            ..Default::default()
        };
        let app = setup(vec![acme, other, nameless], None);

        let response = app
            .router
            .oneshot(search_request(serde_json::json!({
                "jobProfile": "Backend Developer",
                "geography": "india",
                "location": "Karnataka",
                "experienceLevel": "any",
                "remote": "any"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let jobs = json["jobs"].as_array().unwrap();
        assert_eq!(jobs.len(), 3);

        let acme_job = jobs.iter().find(|j| j["id"] == "acme-1").unwrap();
        assert_eq!(acme_job["company"], "Acme Corp");
        let contacts = acme_job["contacts"].as_array().unwrap();
        assert!(contacts
            .iter()
            .any(|c| c["label"] == "HR email" && c["value"] == "hr@acme.com"));
        assert_eq!(acme_job["companyInsight"]["name"], "Acme Corp");

        let nameless_job = jobs.iter().find(|j| j["id"] == "nameless-1").unwrap();
        assert_eq!(nameless_job["company"], "Unknown company");
        assert!(nameless_job["companyInsight"].is_null());

        // Two named employers, one sentinel
        assert_eq!(app.company_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn missing_location_returns_400_without_provider_call() {
        let app = setup(Vec::new(), None);

        let response = app
            .router
            .oneshot(search_request(serde_json::json!({
                "jobProfile": "Backend Developer"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("location"));
        assert_eq!(app.search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_provider_result_returns_empty_jobs_without_lookups() {
        let app = setup(Vec::new(), None);

        let response = app
            .router
            .oneshot(search_request(serde_json::json!({
                "jobProfile": "Backend Developer",
                "location": "Karnataka"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["jobs"], serde_json::json!([]));
        assert_eq!(app.company_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_credential_returns_401() {
        let search_calls = Arc::new(AtomicUsize::new(0));
        let state = AppState {
            search: Arc::new(StubSearch {
                listings: Vec::new(),
                error: None,
                calls: search_calls.clone(),
            }),
            companies: Arc::new(StubCompanies {
                calls: Arc::new(AtomicUsize::new(0)),
            }),
            config: test_config(None),
        };
        let router = build_router(state);

        let response = router
            .oneshot(search_request(serde_json::json!({
                "jobProfile": "Backend Developer",
                "location": "Karnataka"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn provider_error_status_is_forwarded() {
        let app = setup(
            Vec::new(),
            Some((403, "Invalid API key".to_string())),
        );

        let response = app
            .router
            .oneshot(search_request(serde_json::json!({
                "jobProfile": "Backend Developer",
                "location": "Karnataka"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid API key");
    }
}
