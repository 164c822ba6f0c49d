// GitHub HTTP client.
// Handles optional authentication, rate limit tracking, and response status mapping.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITHUB_COLORS_URL: &str =
    "https://raw.githubusercontent.com/ozh/github-colors/master/colors.json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub client with rate limit tracking.
pub struct GitHubClient {
    client: Client,
    api_base: String,
    colors_url: String,
    auth: Option<HeaderValue>,
    rate_limit: RateLimit,
}

impl GitHubClient {
    /// Create a client, authenticating API requests with `token` when one is given.
    ///
    /// The token is only sent to URLs under `api_base`.
    pub fn new(
        token: Option<&str>,
        api_base: &str,
        colors_url: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let auth = token
            .map(|token| {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| Error::Other(e.to_string()))?;
                value.set_sensitive(true);
                Ok::<_, Error>(value)
            })
            .transpose()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("sitekit"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            colors_url: colors_url.to_string(),
            auth,
            rate_limit: RateLimit::default(),
        })
    }

    /// Base URL for REST endpoints, without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// URL of the language colour table.
    pub fn colors_url(&self) -> &str {
        &self.colors_url
    }

    /// Get the current rate limit information.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    /// Whether `url` points at the REST API rather than some other host.
    fn is_api_url(&self, url: &str) -> bool {
        url.strip_prefix(&self.api_base)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?']))
    }

    /// GET an absolute URL and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&mut self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let mut request = self.client.get(url);
        if let Some(auth) = self.auth.as_ref().filter(|_| self.is_api_url(url)) {
            request = request.header(AUTHORIZATION, auth.clone());
        }
        let response = request.send().await.map_err(Error::Http)?;

        let exhausted = self.update_rate_limit(&response);
        let response = self.check_response(response, exhausted).await?;
        let body = response.json().await?;
        Ok(body)
    }

    /// Update rate limit from response headers.
    ///
    /// Returns true when this response reported zero remaining requests.
    fn update_rate_limit(&mut self, response: &Response) -> bool {
        let header = |name: &str| -> Option<u64> {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        if let Some(limit) = header("x-ratelimit-limit") {
            self.rate_limit.limit = limit;
        }
        let remaining = header("x-ratelimit-remaining");
        if let Some(remaining) = remaining {
            self.rate_limit.remaining = remaining;
        }
        if let Some(reset) = header("x-ratelimit-reset") {
            self.rate_limit.reset = reset;
        }
        remaining == Some(0)
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response, exhausted: bool) -> Result<Response> {
        match response.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(response),
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(Error::NotFound(url))
            }
            StatusCode::FORBIDDEN if exhausted => {
                let reset_at = chrono::DateTime::from_timestamp(self.rate_limit.reset as i64, 0)
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(Error::RateLimited { reset_at })
            }
            status => Err(Error::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}
