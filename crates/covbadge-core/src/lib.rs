//! # covbadge core
//!
//! Turns a coverage percentage into a badge image.
//!
//! The value is parsed (`"92.5%"`, `"40"`), a color is picked against a
//! threshold (at or below 85 is red, above is bright green), and a
//! pre-rendered SVG is requested from a static badge service and written
//! to disk.
//!
//! ## Example
//!
//! ```no_run
//! use covbadge_core::{request_badge, BadgeConfig};
//!
//! # async fn example() -> covbadge_core::Result<()> {
//! let outcome = request_badge("92.5%", &BadgeConfig::default()).await?;
//! println!("{} -> {}", outcome.url, outcome.path.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod http;
pub mod output;
pub mod types;

pub use config::BadgeConfig;
pub use error::{Error, ErrorKind, Result};
pub use types::{BadgeColor, BadgeOutcome, Coverage, DEFAULT_THRESHOLD};

/// Fetch a coverage badge and write it to `config.output`
///
/// Nothing is written unless every earlier step succeeds: parse, URL
/// construction, request, status check and UTF-8 decoding.
pub async fn request_badge(coverage: &str, config: &BadgeConfig<'_>) -> Result<BadgeOutcome> {
    config.validate()?;

    let coverage = Coverage::parse(coverage)?;
    let color = coverage.color(config.threshold);
    let url = http::badge_url(&config.endpoint, &config.label, coverage, color)?;
    let url_string = url.to_string();

    let client = http::BadgeClient::from_config(config);
    let svg = client.fetch_svg(url).await?;

    let bytes = output::OutputWriter::write_badge(&config.output, &svg)?;

    Ok(BadgeOutcome {
        coverage,
        color,
        url: url_string,
        path: config.output.clone(),
        bytes,
    })
}

/// Synchronous variant of `request_badge`
///
/// This creates a new Tokio runtime and blocks on the async version.
/// Prefer the async version if you're already in an async context.
pub fn request_badge_sync(coverage: &str, config: &BadgeConfig<'_>) -> Result<BadgeOutcome> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Runtime(e.to_string()))?
        .block_on(request_badge(coverage, config))
}
