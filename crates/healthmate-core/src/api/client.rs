//! API client for the ExerciseDB REST API.
//!
//! `RemoteClient` is the boundary the resolver talks to; `ExerciseDbClient`
//! is the HTTP implementation. Each call is a single attempt: the resolver
//! falls back to the local cache instead of retrying.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::Credentials;
use crate::models::{Category, RemoteExerciseRecord};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Base URL of the ExerciseDB API on RapidAPI
pub const DEFAULT_BASE_URL: &str = "https://exercisedb.p.rapidapi.com";

/// Value of the `X-RapidAPI-Host` header
pub const DEFAULT_API_HOST: &str = "exercisedb.p.rapidapi.com";

/// HTTP request timeout in seconds.
/// Long enough for a slow mobile connection, short enough that the local
/// fallback still feels responsive.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Source of exercise data reachable over the network.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Look up one exercise. `Ok(None)` means the API answered but had nothing.
    async fn fetch_by_id(
        &self,
        id: &str,
        credentials: &Credentials,
    ) -> Result<Option<RemoteExerciseRecord>, ApiError>;

    async fn fetch_by_category(
        &self,
        category: Category,
        credentials: &Credentials,
    ) -> Result<Vec<RemoteExerciseRecord>, ApiError>;
}

/// Connection settings for `ExerciseDbClient`.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// HTTP client for ExerciseDB.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ExerciseDbClient {
    client: Client,
    base_url: Url,
}

impl ExerciseDbClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", settings.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(settings.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Build `{base}/exercises/{segments...}`, percent-encoding each segment
    /// ("full body" becomes "full%20body").
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("exercises")
            .extend(segments);
        Ok(url)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        credentials: &Credentials,
    ) -> Result<Option<T>, ApiError> {
        debug!(url = %url, "Sending ExerciseDB request");

        let response = self
            .client
            .get(url.clone())
            .header(API_KEY_HEADER, &credentials.api_key)
            .header(API_HOST_HEADER, &credentials.host)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        parse_body(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse JSON response from {}: {}", url, e))
        })
    }
}

/// Parse a response body, treating an empty body or JSON `null` as "no data".
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<Option<T>, serde_json::Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(trimmed)
}

#[async_trait]
impl RemoteClient for ExerciseDbClient {
    async fn fetch_by_id(
        &self,
        id: &str,
        credentials: &Credentials,
    ) -> Result<Option<RemoteExerciseRecord>, ApiError> {
        let url = self.endpoint(&["exercise", id])?;
        self.get(url, credentials).await
    }

    async fn fetch_by_category(
        &self,
        category: Category,
        credentials: &Credentials,
    ) -> Result<Vec<RemoteExerciseRecord>, ApiError> {
        let url = self.endpoint(&["bodyPart", category.remote_name()])?;
        let records: Option<Vec<RemoteExerciseRecord>> = self.get(url, credentials).await?;
        Ok(records.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const TEST_KEY: &str = "test-key";

    fn credentials() -> Credentials {
        Credentials::new(TEST_KEY, DEFAULT_API_HOST)
    }

    /// Answers `route` only when both RapidAPI headers are present.
    fn authenticated_get(route: &str) -> wiremock::MockBuilder {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header(API_KEY_HEADER, TEST_KEY))
            .and(header(API_HOST_HEADER, DEFAULT_API_HOST))
    }

    fn client_with_base(base_url: &str) -> ExerciseDbClient {
        let settings = ClientSettings {
            base_url: base_url.to_string(),
            ..ClientSettings::default()
        };
        ExerciseDbClient::new(&settings).expect("Failed to build test client")
    }

    #[test]
    fn test_endpoint_encodes_category() {
        let client = client_with_base(DEFAULT_BASE_URL);
        let url = client
            .endpoint(&["bodyPart", Category::FullBody.remote_name()])
            .expect("Failed to build endpoint");
        assert_eq!(
            url.as_str(),
            "https://exercisedb.p.rapidapi.com/exercises/bodyPart/full%20body"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let client = client_with_base("http://localhost:8080/api/");
        let url = client.endpoint(&["exercise", "0007"]).expect("Failed to build endpoint");
        assert_eq!(url.as_str(), "http://localhost:8080/api/exercises/exercise/0007");
    }

    #[test]
    fn test_endpoint_escapes_id() {
        let client = client_with_base(DEFAULT_BASE_URL);
        let url = client.endpoint(&["exercise", "../admin"]).expect("Failed to build endpoint");
        assert!(url.as_str().ends_with("/exercises/exercise/..%2Fadmin"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let settings = ClientSettings {
            base_url: "not a url".to_string(),
            ..ClientSettings::default()
        };
        assert!(matches!(
            ExerciseDbClient::new(&settings),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_parse_body_empty_and_null() {
        assert_eq!(parse_body::<RemoteExerciseRecord>("").ok(), Some(None));
        assert_eq!(parse_body::<RemoteExerciseRecord>("  null \n").ok(), Some(None));
        assert!(parse_body::<RemoteExerciseRecord>("{\"oops\":").is_err());
    }

    #[test]
    fn test_parse_body_category_list() {
        let json = r#"[{"id":"0001","name":"3/4 sit-up","bodyPart":"waist","target":"abs","equipment":"body weight","instructions":["Lie flat."],"secondaryMuscles":["hip flexors"]}]"#;
        let records = parse_body::<Vec<RemoteExerciseRecord>>(json)
            .expect("Failed to parse list")
            .expect("List should be present");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, "abs");
    }

    #[tokio::test]
    async fn test_fetch_by_category_sends_headers() {
        let server = MockServer::start().await;
        authenticated_get("/exercises/bodyPart/back")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "0027",
                    "name": "barbell bent over row",
                    "bodyPart": "back",
                    "target": "upper back",
                    "equipment": "barbell",
                    "instructions": ["Hinge at the hips.", "Row the bar."],
                    "secondaryMuscles": ["biceps"]
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_base(&server.uri());
        let records = client
            .fetch_by_category(Category::Back, &credentials())
            .await
            .expect("Category request should succeed");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "0027");
        assert_eq!(records[0].equipment, "barbell");
    }

    #[tokio::test]
    async fn test_fetch_by_id_returns_record() {
        let server = MockServer::start().await;
        authenticated_get("/exercises/exercise/0652")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "0652",
                "name": "pull-up",
                "bodyPart": "back",
                "target": "lats",
                "equipment": "body weight"
            })))
            .mount(&server)
            .await;

        let client = client_with_base(&server.uri());
        let record = client
            .fetch_by_id("0652", &credentials())
            .await
            .expect("Id request should succeed")
            .expect("Record should be present");

        assert_eq!(record.name, "pull-up");
        assert!(record.instructions.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_by_id_null_or_empty_body_is_none() {
        let server = MockServer::start().await;
        authenticated_get("/exercises/exercise/null-body")
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;
        authenticated_get("/exercises/exercise/empty-body")
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client_with_base(&server.uri());
        let null_body = client.fetch_by_id("null-body", &credentials()).await;
        let empty_body = client.fetch_by_id("empty-body", &credentials()).await;

        assert!(matches!(null_body, Ok(None)));
        assert!(matches!(empty_body, Ok(None)));
    }

    #[tokio::test]
    async fn test_fetch_by_category_empty_list() {
        let server = MockServer::start().await;
        authenticated_get("/exercises/bodyPart/chest")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_with_base(&server.uri());
        let records = client
            .fetch_by_category(Category::Chest, &credentials())
            .await
            .expect("Empty list is not an error");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_not_retried() {
        let server = MockServer::start().await;
        authenticated_get("/exercises/bodyPart/legs")
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_base(&server.uri());
        let err = client
            .fetch_by_category(Category::Legs, &credentials())
            .await
            .expect_err("503 should fail");

        assert_eq!(err.status_code(), Some(503));
        match err {
            ApiError::Status { code, body } => {
                assert_eq!(code, 503);
                assert_eq!(body, "Service Unavailable");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_key_is_rejected_by_server() {
        let server = MockServer::start().await;
        authenticated_get("/exercises/bodyPart/abs")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_with_base(&server.uri());
        let wrong_key = Credentials::new("other-key", DEFAULT_API_HOST);
        let err = client
            .fetch_by_category(Category::Abs, &wrong_key)
            .await
            .expect_err("Unmatched request should fail");

        // wiremock answers unmatched requests with 404
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_malformed_json_is_invalid_response() {
        let server = MockServer::start().await;
        authenticated_get("/exercises/exercise/0001")
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\":"))
            .mount(&server)
            .await;

        let client = client_with_base(&server.uri());
        let result = client.fetch_by_id("0001", &credentials()).await;
        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Bind then release a port so nothing is listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_with_base(&format!("http://{}", addr));
        let result = client.fetch_by_category(Category::Arms, &credentials()).await;

        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
