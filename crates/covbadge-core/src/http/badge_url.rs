//! Static badge URL construction
//!
//! Badges are addressed as `{endpoint}/badge/{label}-{message}-{color}`.
//! Inside a field a literal `-` is written `--`, a literal `_` is `__`
//! and a space is `_`. The assembled segment is percent-encoded, so the
//! `%` in `92.5%` travels as `%25`.

use crate::error::{Error, Result};
use crate::types::{BadgeColor, Coverage};

/// Escape a badge field for the dash-separated path segment
pub fn escape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for c in field.chars() {
        match c {
            '-' => out.push_str("--"),
            '_' => out.push_str("__"),
            ' ' => out.push('_'),
            _ => out.push(c),
        }
    }
    out
}

/// Build the badge request URL
pub fn badge_url(
    endpoint: &str,
    label: &str,
    coverage: Coverage,
    color: BadgeColor,
) -> Result<reqwest::Url> {
    let mut url = reqwest::Url::parse(endpoint)
        .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;

    let segment = format!(
        "{}-{}%-{}",
        escape_field(label),
        escape_field(&coverage.to_string()),
        color.as_str()
    );

    url.path_segments_mut()
        .map_err(|_| Error::Config(format!("endpoint cannot be a base URL: {}", endpoint)))?
        .pop_if_empty()
        .push("badge")
        .push(&segment);

    Ok(url)
}
