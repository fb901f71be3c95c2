//! Badge fetch configuration

use crate::error::{Error, Result};
use crate::types::DEFAULT_THRESHOLD;
use std::borrow::Cow;
use std::path::PathBuf;
use std::time::Duration;

/// Default badge service
pub const DEFAULT_ENDPOINT: &str = "https://img.shields.io";

/// Default badge label
pub const DEFAULT_LABEL: &str = "coverage";

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "badge.svg";

/// Configuration for a badge fetch
///
/// `Default` reproduces the stock behavior: shields.io, label `coverage`,
/// threshold 85, `./badge.svg`, no request timeout.
#[derive(Debug, Clone)]
pub struct BadgeConfig<'a> {
    /// Base URL of the badge service (no trailing `/badge`)
    pub endpoint: Cow<'a, str>,
    /// Left-hand label text
    pub label: Cow<'a, str>,
    /// Values at or below this are red
    pub threshold: f64,
    /// Where the badge is written
    pub output: PathBuf,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// User-Agent header sent to the service
    pub user_agent: Cow<'a, str>,
}

impl Default for BadgeConfig<'_> {
    fn default() -> Self {
        Self {
            endpoint: Cow::Borrowed(DEFAULT_ENDPOINT),
            label: Cow::Borrowed(DEFAULT_LABEL),
            threshold: DEFAULT_THRESHOLD,
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout: None,
            user_agent: Cow::Borrowed(concat!("covbadge/", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl BadgeConfig<'_> {
    /// Check the configuration before any network or file activity
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", self.endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "endpoint must be http or https: {}",
                self.endpoint
            )));
        }

        if self.label.is_empty() {
            return Err(Error::Config("label must not be empty".to_string()));
        }

        if !self.threshold.is_finite() {
            return Err(Error::Config(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }

        if self.output.as_os_str().is_empty() {
            return Err(Error::Config("output path must not be empty".to_string()));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(Error::Config("timeout must be greater than zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_matches_stock_behavior() {
        let config = BadgeConfig::default();
        assert_eq!(config.endpoint, "https://img.shields.io");
        assert_eq!(config.label, "coverage");
        assert_eq!(config.threshold, 85.0);
        assert_eq!(config.output, PathBuf::from("badge.svg"));
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("covbadge/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = BadgeConfig {
            endpoint: Cow::Borrowed("not a url"),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Config);
    }

    #[test]
    fn test_non_http_endpoint() {
        let config = BadgeConfig {
            endpoint: Cow::Borrowed("ftp://example.com"),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Config);
    }

    #[test]
    fn test_non_finite_threshold() {
        let config = BadgeConfig {
            threshold: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Config);
    }

    #[test]
    fn test_empty_output_and_label() {
        let config = BadgeConfig {
            output: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BadgeConfig {
            label: Cow::Borrowed(""),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = BadgeConfig {
            timeout: Some(Duration::ZERO),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BadgeConfig {
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
