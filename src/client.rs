//! HTTP client for the list-records endpoint.

use crate::config::{Config, ENV_API_KEY};
use crate::error::{Error, Result};
use crate::query::{QueryParams, build_table_url};
use crate::types::Page;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::debug;

/// Authenticated client bound to one base
pub struct AirtableClient {
    http: reqwest::Client,
    api_url: String,
    base_id: String,
    timeout: Duration,
}

impl AirtableClient {
    /// Create a client from a loaded configuration
    ///
    /// # Errors
    /// Returns error if the API key is not a valid header value or the HTTP
    /// client cannot be created
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_parts(
            &config.api_url,
            &config.base_id,
            &config.api_key,
            config.request_timeout,
        )
    }

    /// Create a client from individual settings
    pub fn with_parts(
        api_url: &str,
        base_id: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| Error::config("API key contains invalid characters", ENV_API_KEY))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!("airtable-fetch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            base_id: base_id.to_string(),
            timeout,
        })
    }

    /// URL for one page of `table_id`
    pub fn table_url(&self, table_id: &str, params: Option<&QueryParams>) -> Result<String> {
        build_table_url(&self.api_url, &self.base_id, table_id, params)
    }

    /// GET a single page
    ///
    /// # Errors
    /// - [`Error::Api`] on any non-success status, carrying the response body
    /// - [`Error::Network`] on transport failure, timeout, or a body that is
    ///   not a valid page
    pub async fn fetch_page(&self, url: &str) -> Result<Page> {
        debug!(url = %url, timeout_secs = self.timeout.as_secs(), "GET page");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = body_or_placeholder(response.text().await);
            return Err(Error::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        Ok(response.json::<Page>().await?)
    }
}

/// Error body text, or a marker naming why it could not be read
fn body_or_placeholder<E: std::fmt::Display>(body: std::result::Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("<body unavailable: {e}>"))
}
