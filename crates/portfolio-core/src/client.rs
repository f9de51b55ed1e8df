//! # Repository Loader
//!
//! HTTP client for the repository-hosting API.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::error::{ApiError, ApiResult};
use crate::types::{showcase, Project, RepoRecord};

/// Public GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Media type requested from the API.
pub const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for listing an account's repositories.
///
/// The client is cheaply cloneable and can be moved into spawned tasks.
///
/// # Examples
///
/// ```rust,ignore
/// use portfolio_core::GitHubClient;
///
/// let client = GitHubClient::new("https://api.github.com")?;
/// let projects = client.load_projects("JessyTeixeira-QA").await?;
/// println!("Showing {} projects", projects.len());
/// ```
#[derive(Clone)]
pub struct GitHubClient {
    base_url: String,
    http: Client,
}

impl GitHubClient {
    /// Creates a client for the API at `base_url` with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists the account's repositories, most recently updated first.
    ///
    /// # Errors
    ///
    /// * [`ApiError::EmptyHandle`] - `handle` is empty
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Upstream`] - Non-success status
    /// * [`ApiError::InvalidResponse`] - Response could not be parsed
    pub async fn list_repositories(&self, handle: &str) -> ApiResult<Vec<RepoRecord>> {
        if handle.is_empty() {
            return Err(ApiError::EmptyHandle);
        }

        let res = self
            .http
            .get(format!("{}/users/{}/repos", self.base_url, handle))
            .query(&[("sort", "updated"), ("direction", "desc")])
            .header(ACCEPT, GITHUB_V3_ACCEPT)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ApiError::Upstream {
                status: res.status().as_u16(),
                message: res.text().await.unwrap_or_default(),
            });
        }

        res.json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Loads the projects to show for `handle`.
    ///
    /// Forks and archived repositories are dropped; upstream order is kept.
    /// No partial results are returned and nothing is retried.
    ///
    /// # Errors
    ///
    /// Any error from [`GitHubClient::list_repositories`].
    pub async fn load_projects(&self, handle: &str) -> ApiResult<Vec<Project>> {
        match self.list_repositories(handle).await {
            Ok(records) => {
                let projects = showcase(&records);
                tracing::info!(
                    handle,
                    fetched = records.len(),
                    shown = projects.len(),
                    "Loaded repositories"
                );
                Ok(projects)
            }
            Err(e) => {
                tracing::warn!(handle, error = %e, "Failed to load repositories");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo_json(name: &str, fork: bool, archived: bool) -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "name": name,
            "description": null,
            "html_url": format!("https://github.com/octo/{name}"),
            "language": "TypeScript",
            "updated_at": "2025-10-10T15:00:00Z",
            "fork": fork,
            "archived": archived
        })
    }

    #[tokio::test]
    async fn test_request_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/octo/repos"))
            .and(query_param("sort", "updated"))
            .and(query_param("direction", "desc"))
            .and(header("accept", GITHUB_V3_ACCEPT))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::new(format!("{}/api", mock_server.uri())).unwrap();
        let repos = client.list_repositories("octo").await.unwrap();

        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn test_load_projects_keeps_upstream_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octo/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                repo_json("newest", false, false),
                repo_json("forked", true, false),
                repo_json("older", false, false),
                repo_json("retired", false, true),
            ])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::new(mock_server.uri()).unwrap();
        let projects = client.load_projects("octo").await.unwrap();

        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["newest", "older"]);
        assert_eq!(projects[0].updated_at, "10/10/2025");
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octo/repos"))
            .respond_with(ResponseTemplate::new(403).set_body_string("rate limited"))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::new(mock_server.uri()).unwrap();
        let err = client.load_projects("octo").await.unwrap_err();

        match err {
            ApiError::Upstream { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "rate limited");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octo/repos"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "oops"})),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::new(mock_server.uri()).unwrap();
        let err = client.load_projects("octo").await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_empty_handle_rejected_without_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::new(mock_server.uri()).unwrap();
        let err = client.load_projects("").await.unwrap_err();

        assert!(matches!(err, ApiError::EmptyHandle));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = GitHubClient::new("http://127.0.0.1:1").unwrap();
        let err = client.load_projects("octo").await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.is_upstream_unavailable());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GitHubClient::new("https://api.github.com/").unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_BASE_URL);
    }
}
