use super::*;

#[test]
fn defaults_match_local_backend() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.loading_delay, Duration::from_millis(2500));
}

#[test]
fn overrides_are_trimmed() {
    let cfg = ClientConfig::from_values(Some(" https://api.example.test/ "), Some(" 100 "));
    assert_eq!(cfg.api_base, "https://api.example.test");
    assert_eq!(cfg.loading_delay, Duration::from_millis(100));
}

#[test]
fn invalid_delay_falls_back_to_default() {
    let cfg = ClientConfig::from_values(None, Some("soon"));
    assert_eq!(cfg.loading_delay, Duration::from_millis(DEFAULT_LOADING_DELAY_MS));
}

#[test]
fn blank_api_base_falls_back_to_default() {
    assert_eq!(ClientConfig::from_values(Some("  "), None).api_base, DEFAULT_API_BASE);
}

#[test]
fn endpoint_joins_base_and_path() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint("/api/auth/login"), "http://localhost:5000/api/auth/login");
}
