//! Core type definitions

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Coverage threshold at or below which a badge is red
pub const DEFAULT_THRESHOLD: f64 = 85.0;

/// A coverage percentage parsed from user input
///
/// Accepts `"92.5%"`, `"40"`, `" 85 "`. Percent signs are stripped from
/// both ends before parsing.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Coverage(f64);

impl Coverage {
    /// Wrap an already-numeric value
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Parse a coverage string, stripping `%` and surrounding whitespace
    pub fn parse(input: &str) -> Result<Self> {
        let number = input.trim().trim_matches('%').trim();
        if number.is_empty() {
            return Err(Error::Parse(format!("invalid coverage value '{}'", input)));
        }

        number
            .parse::<f64>()
            .map(Self)
            .map_err(|e| Error::Parse(format!("invalid coverage value '{}': {}", input, e)))
    }

    /// Numeric value
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Pick the badge color against `threshold`
    #[inline]
    pub fn color(self, threshold: f64) -> BadgeColor {
        BadgeColor::for_value(self.0, threshold)
    }
}

impl FromStr for Coverage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Renders the shortest round-trip form, always with a fractional part
/// (`40` renders as `40.0`).
impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Badge color understood by the badge service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BadgeColor {
    /// Coverage at or below threshold
    Red,
    /// Coverage above threshold
    BrightGreen,
}

impl BadgeColor {
    /// `Red` iff `value <= threshold`. NaN compares false and lands on `BrightGreen`.
    #[inline]
    pub fn for_value(value: f64, threshold: f64) -> Self {
        if value <= threshold {
            Self::Red
        } else {
            Self::BrightGreen
        }
    }

    /// Color name as used in badge URLs
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::BrightGreen => "brightgreen",
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful badge fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeOutcome {
    /// Parsed coverage
    pub coverage: Coverage,
    /// Selected color
    pub color: BadgeColor,
    /// URL the badge was requested from
    pub url: String,
    /// File the badge was written to
    pub path: PathBuf,
    /// Bytes written
    pub bytes: usize,
}
