use super::*;
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
        vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.site_root.is_none());
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_site_root() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("SITE_ROOT", "/srv/site")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
    assert!(err.to_string().starts_with("invalid PORT \"http\""));
}

#[test]
fn rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn rejects_blank_site_root() {
    let err = ServerConfig::from_lookup(lookup(&[("SITE_ROOT", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::EmptySiteRoot));
}
