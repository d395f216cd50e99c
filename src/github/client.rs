//! GitHub API client.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::debug;

use crate::error::{HerdError, Result};

/// Default API base address for github.com.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Environment variable overriding the API base address (enterprise hosts).
pub const API_BASE_ENV: &str = "GITHUB_API_URL";

/// Environment variable holding the optional bearer credential.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Client for interacting with the GitHub API.
///
/// A token is optional: without one the client is unauthenticated and
/// subject to the stricter anonymous rate limits, which is enough for
/// listing and cloning public repositories.
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) token: Option<String>,
    pub(crate) base_url: String,
    pub(crate) client: Client,
}

impl GitHubClient {
    /// Create an unauthenticated client against the default API base.
    pub fn new() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_API_BASE.into(),
            client: Client::new(),
        }
    }

    /// Set a bearer token for authenticated requests.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Point the client at a custom base URL (GitHub Enterprise).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        // Remove trailing slash if present
        if url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// Create a client from the environment.
    ///
    /// Reads the token from `GITHUB_TOKEN` and the base address from
    /// `GITHUB_API_URL`; both are optional.
    pub fn from_env() -> Self {
        let mut client = Self::new();
        if let Ok(token) = std::env::var(TOKEN_ENV)
            && !token.is_empty()
        {
            client = client.with_token(token);
        }
        if let Ok(base_url) = std::env::var(API_BASE_ENV)
            && !base_url.is_empty()
        {
            client = client.with_base_url(base_url);
        }
        client
    }

    /// Get the default headers for API requests.
    pub(crate) fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .expect("Invalid token format"),
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("repoherd"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers
    }

    /// Make a GET request to the GitHub API.
    pub(crate) fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self.client.get(&url).headers(self.headers()).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(HerdError::Api {
                message: api_message(status, &body),
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| HerdError::Api {
            message: format!("Failed to parse response: {}", e),
        })
    }

    /// Make a POST request to the GitHub API.
    pub(crate) fn post<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(HerdError::Api {
                message: api_message(status, &body),
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| HerdError::Api {
            message: format!("Failed to parse response: {}", e),
        })
    }

    /// Get the configured token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an error message from a failed API response.
///
/// The API signals errors with a JSON payload carrying a `message` field;
/// when present it is surfaced directly, otherwise the raw body is kept.
fn api_message(status: reqwest::StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiError {
        message: String,
    }

    match serde_json::from_str::<ApiError>(body) {
        Ok(error) => format!("{} ({})", error.message, status),
        Err(_) => format!("API request failed ({}): {}", status, body),
    }
}
