use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn from_lookup_defaults_match_dev_server() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.proxy.target, DEFAULT_API_PROXY_TARGET);
    assert!(cfg.proxy.change_origin);
    assert!(cfg.proxy.secure);
    assert_eq!(cfg.site_root, PathBuf::from("client/dist"));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("API_PROXY_TARGET", "http://localhost:5000/"),
        ("API_PROXY_CHANGE_ORIGIN", "false"),
        ("API_PROXY_SECURE", "0"),
        ("SITE_ROOT", "/srv/photoshare"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.proxy.target, "http://localhost:5000");
    assert!(!cfg.proxy.change_origin);
    assert!(!cfg.proxy.secure);
    assert_eq!(cfg.site_root, PathBuf::from("/srv/photoshare"));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "http".to_owned() });
}

#[test]
fn from_lookup_rejects_target_without_scheme() {
    let err = ServerConfig::from_lookup(lookup_from(&[("API_PROXY_TARGET", "example.com")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "API_PROXY_TARGET", .. }));
}

#[test]
fn from_lookup_rejects_unparseable_bool() {
    let err = ServerConfig::from_lookup(lookup_from(&[("API_PROXY_SECURE", "sometimes")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid API_PROXY_SECURE: \"sometimes\"");
}
