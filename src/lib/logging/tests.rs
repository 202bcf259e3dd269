use tracing::level_filters::LevelFilter;

use super::fallback_filter;

#[test]
fn fallback_accepts_standard_levels() {
    for level in ["error", "warn", "info", "debug", "trace", "libsite=debug"] {
        assert!(fallback_filter(level).is_ok(), "rejected {level}");
    }
    let filter = fallback_filter("warn").unwrap();
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
}

#[test]
fn fallback_rejects_invalid_level() {
    let err = fallback_filter("libsite=loud").unwrap_err();
    assert!(err.to_string().contains("Invalid log level"), "{err}");
}
