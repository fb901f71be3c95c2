#![no_main]
use covbadge_core::{BadgeColor, Coverage, DEFAULT_THRESHOLD};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(coverage) = Coverage::parse(s) {
            let color = coverage.color(DEFAULT_THRESHOLD);
            assert_eq!(color == BadgeColor::Red, coverage.value() <= DEFAULT_THRESHOLD);
            // Rendered value must parse back to the same number
            let rendered = coverage.to_string();
            if coverage.value().is_finite() {
                assert_eq!(Coverage::parse(&rendered).map(Coverage::value).ok(), Some(coverage.value()));
            }
        }
    }
});
