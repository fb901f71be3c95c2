//! Property-based tests using proptest

use covbadge_core::http::{badge_url, escape_field};
use covbadge_core::{BadgeColor, Coverage, DEFAULT_THRESHOLD};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_color_matches_threshold(value in -1000.0f64..1000.0) {
        let expected = if value <= 85.0 { BadgeColor::Red } else { BadgeColor::BrightGreen };
        prop_assert_eq!(Coverage::new(value).color(DEFAULT_THRESHOLD), expected);
    }

    #[test]
    fn test_parse_accepts_percent_suffix(value in 0.0f64..100.0) {
        let rendered = format!("{}%", value);
        let parsed = Coverage::parse(&rendered).unwrap();
        prop_assert_eq!(parsed.value(), value);
    }

    #[test]
    fn test_parsed_color_agrees_with_numeric(value in 0.0f64..100.0, suffix in prop::bool::ANY) {
        let rendered = if suffix { format!("{}%", value) } else { value.to_string() };
        let color = Coverage::parse(&rendered).unwrap().color(DEFAULT_THRESHOLD);
        prop_assert_eq!(color == BadgeColor::Red, value <= 85.0);
    }

    #[test]
    fn test_alphabetic_input_never_parses(s in "[a-mo-z]{1,20}") {
        // No 'n', so "nan" and "inf" cannot be spelled.
        prop_assert!(Coverage::parse(&s).is_err());
    }

    #[test]
    fn test_escaped_field_has_no_single_dash(s in "[a-z _-]{0,30}") {
        let escaped = escape_field(&s);
        prop_assert!(!escaped.contains(' '));
        // Every dash run in the output has even length.
        for run in escaped.split(|c| c != '-').filter(|r| !r.is_empty()) {
            prop_assert_eq!(run.len() % 2, 0);
        }
    }

    #[test]
    fn test_badge_url_shape(value in 0.0f64..100.0) {
        let coverage = Coverage::new(value);
        let color = coverage.color(DEFAULT_THRESHOLD);
        let url = badge_url("https://img.shields.io", "coverage", coverage, color).unwrap();
        let expected_tail = format!("%25-{}", color.as_str());
        prop_assert!(url.path().starts_with("/badge/coverage-"));
        prop_assert!(url.path().ends_with(&expected_tail));
    }
}
