//! HTTP client used to query search engines and download candidates.
//!
//! Every request is a single attempt with a fixed timeout. Redirects are
//! followed. The [`Fetch`] trait is the seam the lookup services depend on,
//! so they can be driven by canned responses in tests.

mod response;
mod user_agent;

pub use response::HeadResponse;
pub use user_agent::{resolve_user_agent, IMPERSONATE, USER_AGENT};

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

/// Error type for HTTP operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    #[error("Failed to create HTTP client: {0}")]
    Build(String),
}

/// Network operations the lookup services need.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET a page and return its body as text. Non-2xx is an error.
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;

    /// GET a resource and return its raw body. Non-2xx is an error.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// HEAD a resource, following redirects. Any status is returned as-is.
    async fn head(&self, url: &str) -> Result<HeadResponse, FetchError>;
}

fn extract_response_headers(response: &Response) -> HashMap<String, String> {
    response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.to_string(), v.to_string()))
        })
        .collect()
}

/// Builder for constructing an `HttpClient`.
pub struct HttpClientBuilder {
    timeout: Duration,
    head_timeout: Duration,
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    /// Set the user agent string.
    /// - `"impersonate"`: Use random real browser user agent
    /// - Any other string: Use as-is
    /// - Not called: Use default equipscout user agent
    pub fn user_agent(mut self, ua: &str) -> Self {
        self.user_agent = Some(ua.to_string());
        self
    }

    /// Timeout for HEAD requests (PDF verification).
    pub fn head_timeout(mut self, timeout: Duration) -> Self {
        self.head_timeout = timeout;
        self
    }

    /// Build the `HttpClient`.
    pub fn build(self) -> Result<HttpClient, FetchError> {
        let user_agent = resolve_user_agent(self.user_agent.as_deref());

        let client = Client::builder()
            .user_agent(&user_agent)
            .timeout(self.timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| FetchError::Build(e.to_string()))?;

        debug!("HTTP client ready (user agent: {})", user_agent);

        Ok(HttpClient {
            client,
            head_timeout: self.head_timeout,
        })
    }
}

/// reqwest-backed [`Fetch`] implementation.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    head_timeout: Duration,
}

impl HttpClient {
    /// Create a builder. `timeout` applies to GET requests and is also the
    /// default HEAD timeout.
    pub fn builder(timeout: Duration) -> HttpClientBuilder {
        HttpClientBuilder {
            timeout,
            head_timeout: timeout,
            user_agent: None,
        }
    }

    async fn get_ok(&self, url: &str) -> Result<Response, FetchError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("GET {} -> {} in {:?}", url, status, start.elapsed());

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Fetch for HttpClient {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.get_ok(url).await?;
        Ok(response.text().await?)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.get_ok(url).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn head(&self, url: &str) -> Result<HeadResponse, FetchError> {
        let start = Instant::now();
        let response = self
            .client
            .head(url)
            .timeout(self.head_timeout)
            .send()
            .await?;
        debug!("HEAD {} -> {} in {:?}", url, response.status(), start.elapsed());

        Ok(HeadResponse {
            status: response.status(),
            headers: extract_response_headers(&response),
        })
    }
}
