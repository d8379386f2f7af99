//! Client for the remote LinkedIn scraping service.
//!
//! The service does the actual scraping; this crate only forwards the search
//! request and decodes the `{error}` / `{profile}` reply.

use async_trait::async_trait;
use common::{SCRAPE_PATH, ScrapeRequest, ScrapeResponse};
use reqwest::Url;
use thiserror::Error;

pub use reqwest::StatusCode;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid scrape endpoint {0:?}")]
    InvalidEndpoint(String),
    #[error("request to scraping service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("scraping service answered with status {0}")]
    Status(StatusCode),
    #[error("unexpected response from scraping service: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can run a scrape for the browser.
#[async_trait]
pub trait ScrapeApi: Send + Sync {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ScrapeClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ScrapeClient {
    /// Builds a client for the service rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(SCRAPE_PATH))
            .map_err(|_| ClientError::InvalidEndpoint(base_url.to_string()))?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ScrapeApi for ScrapeClient {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse, ClientError> {
        tracing::debug!(endpoint = %self.endpoint, limit = request.limit, "Sending scrape request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "Scrape response received");

        // The service reports its own failures as `{error}` bodies, often with
        // a non-2xx status, so the body is decoded before the status is judged.
        match serde_json::from_slice::<ScrapeResponse>(&body) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !status.is_success() => Err(ClientError::Status(status)),
            Err(e) => Err(ClientError::Decode(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode as AxumStatus, routing::post};
    use serde_json::{Value, json};

    /// Serves `router` on an ephemeral port and returns its base URL.
    async fn spawn_service(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn request() -> ScrapeRequest {
        ScrapeRequest {
            url: "https://www.linkedin.com/search/results/people/?keywords=rust".into(),
            session_cookie: "li_at=secret".into(),
            limit: 2,
        }
    }

    #[test]
    fn test_endpoint_joins_scrape_path() {
        let client = ScrapeClient::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://127.0.0.1:8000/linkedin/scrape_by_url"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ScrapeClient::new("not a url"),
            Err(ClientError::InvalidEndpoint(_))
        ));
    }

    #[tokio::test]
    async fn test_posts_request_and_decodes_profiles() {
        let router = Router::new().route(
            "/linkedin/scrape_by_url",
            post(|Json(body): Json<Value>| async move {
                // Echo the request back inside the profile so the test can see it.
                Json(json!({
                    "profile": [
                        {"name": body["url"], "title": body["session_cookie"]},
                        {"name": "Second", "location": body["limit"].to_string()}
                    ]
                }))
            }),
        );
        let base = spawn_service(router).await;
        let client = ScrapeClient::new(&base).unwrap();

        let response = client.scrape(&request()).await.unwrap();
        let ScrapeResponse::Success { profile } = response else {
            panic!("expected success");
        };
        let profiles = profile.into_vec();
        assert_eq!(profiles.len(), 2);
        assert_eq!(
            profiles[0].name.as_deref(),
            Some("https://www.linkedin.com/search/results/people/?keywords=rust")
        );
        assert_eq!(profiles[0].title.as_deref(), Some("li_at=secret"));
        assert_eq!(profiles[1].location.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_error_body_with_failure_status() {
        let router = Router::new().route(
            "/linkedin/scrape_by_url",
            post(|| async {
                (
                    AxumStatus::BAD_REQUEST,
                    Json(json!({"error": "Session cookie expired"})),
                )
            }),
        );
        let base = spawn_service(router).await;
        let client = ScrapeClient::new(&base).unwrap();

        let response = client.scrape(&request()).await.unwrap();
        assert_eq!(
            response,
            ScrapeResponse::Failure {
                error: "Session cookie expired".into()
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_failure_reports_status() {
        let router = Router::new().route(
            "/linkedin/scrape_by_url",
            post(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_service(router).await;
        let client = ScrapeClient::new(&base).unwrap();

        let err = client.scrape(&request()).await.unwrap_err();
        assert!(matches!(err, ClientError::Status(s) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let router = Router::new().route(
            "/linkedin/scrape_by_url",
            post(|| async { Json(json!({"status": "queued"})) }),
        );
        let base = spawn_service(router).await;
        let client = ScrapeClient::new(&base).unwrap();

        let err = client.scrape(&request()).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ScrapeClient::new(&format!("http://{}", addr)).unwrap();
        let err = client.scrape(&request()).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
