#![no_main]
use covbadge_core::http::badge_url;
use covbadge_core::Coverage;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // First 8 bytes = coverage value, rest = label
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[..8]);
    let coverage = Coverage::new(f64::from_le_bytes(raw));

    if let Ok(label) = std::str::from_utf8(&data[8..]) {
        let color = coverage.color(85.0);
        if let Ok(url) = badge_url("https://img.shields.io", label, coverage, color) {
            // Label content never escapes the single badge path segment
            assert_eq!(url.path_segments().map(|s| s.count()), Some(2));
            assert!(url.query().is_none());
            assert!(url.fragment().is_none());
        }
    }
});
