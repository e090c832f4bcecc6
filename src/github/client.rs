use crate::config::Config;
use crate::github::endpoint::Endpoint;
use crate::github::models::{GitHubUser, UsersResponse};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("GitHub API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Unexpected response body: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

/// Anything that can load users for an endpoint
#[async_trait::async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self, endpoint: &Endpoint) -> Result<Vec<GitHubUser>, GitHubError>;
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }
}

#[async_trait::async_trait]
impl UserSource for GitHubClient {
    /// Load the users for an endpoint, accepting both the search and the
    /// listing body shapes
    async fn fetch_users(&self, endpoint: &Endpoint) -> Result<Vec<GitHubUser>, GitHubError> {
        let url = endpoint.url(&self.base_url);

        info!("📡 GitHub API: GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("✗ GitHub API error: {}", status);
            return Err(GitHubError::Status { status, body });
        }

        // Get the raw response text first for debugging on error
        let response_text = response.text().await?;

        let users = serde_json::from_str::<UsersResponse>(&response_text)
            .map_err(|e| {
                error!("JSON parsing error for {}: {}", url, e);
                debug!("Raw response: {}", response_text);
                e
            })?
            .into_users();

        info!("✓ GitHub returned {} user(s)", users.len());
        for (i, user) in users.iter().enumerate().take(3) {
            debug!("  {}. {} (id: {})", i + 1, user.login, user.id);
        }

        Ok(users)
    }
}
