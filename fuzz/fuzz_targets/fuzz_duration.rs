#![no_main]

use std::time::Duration;

use envbind::duration::parse_duration;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing should never panic
    let Ok(parsed) = parse_duration(data) else {
        return;
    };

    // Totals never exceed i64::MAX nanoseconds
    assert!(parsed.as_nanos() <= i64::MAX as u128);

    // A leading '-' is only accepted for a zero total
    if data.starts_with('-') {
        assert_eq!(parsed, Duration::ZERO, "negative duration accepted: {data:?}");
    }

    // Whole nanoseconds printed back with the `ns` unit parse to the same value
    let reparsed = parse_duration(&format!("{}ns", parsed.as_nanos()))
        .expect("canonical form must parse");
    assert_eq!(parsed, reparsed);
});
