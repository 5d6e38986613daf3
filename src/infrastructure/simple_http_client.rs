//! HTTP client for fetching listing pages
//!
//! A configurable client that presents browser-like headers and surfaces
//! non-2xx responses and empty bodies as errors. The extraction core never
//! sees these failures; callers map them into the result envelope.

use anyhow::{Result, anyhow};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Response};
use scraper::Html;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::infrastructure::config::{DEFAULT_HEADERS, defaults};

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            user_agent: defaults::USER_AGENT.to_string(),
            follow_redirects: true,
        }
    }
}

/// HTTP client with browser headers and error mapping
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .default_headers(Self::default_header_map()?)
            .cookie_store(true)
            .gzip(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(defaults::MAX_REDIRECTS)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// Static browser headers applied to every request
    fn default_header_map() -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in DEFAULT_HEADERS {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }
        Ok(headers)
    }

    /// Fetch a raw response; non-2xx statuses are errors
    pub async fn fetch_response(&self, url: &str) -> Result<Response> {
        info!("🌐 HTTP GET: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("HTTP request failed: {}", e))?;

        if !response.status().is_success() {
            error!("❌ HTTP error {}: {}", response.status(), url);
            return Err(anyhow!("HTTP error {}: {}", response.status(), url));
        }

        Ok(response)
    }

    /// Fetch page markup as a string (Send-compatible)
    pub async fn fetch_html_string(&self, url: &str) -> Result<String> {
        let response = self.fetch_response(url).await?;

        let html_content = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response body: {}", e))?;

        if html_content.is_empty() {
            return Err(anyhow!("Empty response from {}", url));
        }

        debug!(
            "Fetched {} bytes from {} (timeout {}s)",
            html_content.len(),
            url,
            self.config.timeout_seconds
        );
        Ok(html_content)
    }

    /// Fetch and parse page markup in one step
    pub async fn fetch_html(&self, url: &str) -> Result<Html> {
        let html_content = self.fetch_html_string(url).await?;
        Ok(Html::parse_document(&html_content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = HttpClientConfig {
            timeout_seconds: 10,
            user_agent: "Test Agent".to_string(),
            follow_redirects: false,
        };

        let client = HttpClient::with_config(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_header_map() {
        let headers = HttpClient::default_header_map().unwrap();
        assert!(headers.contains_key("accept"));
        assert!(headers.contains_key("accept-language"));
    }
}
