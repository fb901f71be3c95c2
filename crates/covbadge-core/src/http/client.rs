//! Badge service HTTP client

use crate::config::BadgeConfig;
use crate::error::{Error, Result};
use std::time::Duration;

/// HTTP client for the badge rendering service
///
/// One GET per badge, no retries and no authentication.
pub struct BadgeClient {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl BadgeClient {
    /// Create a new badge client
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        Self { client, timeout }
    }

    /// Create from a badge configuration
    pub fn from_config(config: &BadgeConfig<'_>) -> Self {
        Self::new(&config.user_agent, config.timeout)
    }

    /// Fetch a badge and decode its body as UTF-8 text
    ///
    /// Non-success statuses are errors; the body of an error page is never
    /// returned as a badge.
    pub async fn fetch_svg(&self, url: reqwest::Url) -> Result<String> {
        tracing::debug!(%url, "requesting badge");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("badge request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, url = %response.url(), "badge service returned an error");
            return Err(Error::Status(format!(
                "badge service returned {} for {}",
                status,
                response.url()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Http(format!("failed to read badge response: {}", e)))?;

        Ok(String::from_utf8(body.to_vec())?)
    }
}
