//! GitHub Content Repository
//!
//! [`ContentRepository`] implementation backed by the GitHub contents
//! API. The file's blob `sha` is the version token: a `PUT` carrying a
//! stale `sha` is rejected by GitHub with 409, which is the conflict
//! signal for the optimistic write.

use std::sync::Arc;

use http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use platform::crypto::{from_base64, to_base64};

use crate::domain::repository::{ContentRepository, StoredContent, VersionToken};
use crate::error::{AdminError, AdminResult};

const GITHUB_API_VERSION: &str = "2022-11-28";
const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// Coordinates of the content file inside the external repository
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// API base URL, overridable for tests
    pub api_base: String,
    /// Token with `contents: write` permission on the repository
    pub token: String,
    pub owner: String,
    pub repo: String,
    /// Path of the content file within the repository
    pub path: String,
    pub branch: String,
}

impl GithubConfig {
    pub fn new(
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            token: token.into(),
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
            branch: branch.into(),
        }
    }
}

/// Response shape of `GET /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Deserialize)]
struct ContentsMeta {
    content: String,
    sha: String,
}

/// Error body returned by the GitHub API
#[derive(Debug, Deserialize)]
struct GithubErrorBody {
    message: Option<String>,
}

/// GitHub-backed content repository
#[derive(Clone)]
pub struct GithubContentRepository {
    http: reqwest::Client,
    config: Arc<GithubConfig>,
}

impl GithubContentRepository {
    pub fn new(config: GithubConfig) -> AdminResult<Self> {
        // GitHub rejects requests without a User-Agent
        let http = reqwest::Client::builder()
            .user_agent("portfolio-admin-api")
            .build()
            .map_err(|e| AdminError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_base, self.config.owner, self.config.repo, self.config.path
        )
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(http::header::ACCEPT, ACCEPT_GITHUB_JSON)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .bearer_auth(&self.config.token)
    }

    /// Upstream failure message: the API's own `message` when it sent
    /// one, a generic fallback otherwise. Never the raw body.
    async fn upstream_error(response: reqwest::Response) -> AdminError {
        let status = response.status();
        let message = response
            .json::<GithubErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "GitHub request failed".to_string());

        tracing::debug!(status = %status, message = %message, "GitHub API rejected request");
        AdminError::Upstream(message)
    }
}

impl ContentRepository for GithubContentRepository {
    async fn fetch(&self) -> AdminResult<StoredContent> {
        let response = self
            .request(self.http.get(self.contents_url()))
            .query(&[("ref", self.config.branch.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "GitHub fetch failed");
                AdminError::Upstream("GitHub request failed".to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        let meta: ContentsMeta = response.json().await.map_err(|_| {
            AdminError::Upstream("GitHub returned an unexpected payload".to_string())
        })?;

        let bytes = from_base64(&meta.content)
            .map_err(|_| AdminError::Upstream("Stored content is not valid base64".to_string()))?;

        Ok(StoredContent {
            bytes,
            version: VersionToken::new(meta.sha),
        })
    }

    async fn store(&self, bytes: &[u8], version: &VersionToken, message: &str) -> AdminResult<()> {
        let body = json!({
            "message": message,
            "content": to_base64(bytes),
            "sha": version.as_str(),
            "branch": self.config.branch,
        });

        let response = self
            .request(self.http.put(self.contents_url()))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "GitHub store failed");
                AdminError::Upstream("GitHub request failed".to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::CONFLICT {
            Err(AdminError::Conflict)
        } else {
            Err(Self::upstream_error(response).await)
        }
    }
}
