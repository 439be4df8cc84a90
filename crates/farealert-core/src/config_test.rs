use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "FAREALERT_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults are valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.source_label, "gmail");
    assert_eq!(cfg.rank_limit, 100);
    assert_eq!(cfg.extractor, ExtractorConfig::default());
    assert_eq!(cfg.extractor.tracking_link_prefix, "https://c.gle/");
    assert_eq!(cfg.extractor.sibling_scan_limit, 6);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("FAREALERT_ENV", "production");
    map.insert("FAREALERT_LOG_LEVEL", "debug");
    map.insert("FAREALERT_SOURCE_LABEL", "imap");
    map.insert("FAREALERT_RANK_LIMIT", "25");
    map.insert("FAREALERT_TRACKING_LINK_PREFIX", "https://track.example/");
    map.insert("FAREALERT_SIBLING_SCAN_LIMIT", "3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.source_label, "imap");
    assert_eq!(cfg.rank_limit, 25);
    assert_eq!(cfg.extractor.tracking_link_prefix, "https://track.example/");
    assert_eq!(cfg.extractor.sibling_scan_limit, 3);
}

#[test]
fn build_app_config_rejects_invalid_rank_limit() {
    let mut map = HashMap::new();
    map.insert("FAREALERT_RANK_LIMIT", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FAREALERT_RANK_LIMIT"),
        "expected InvalidEnvVar(FAREALERT_RANK_LIMIT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_sibling_scan_limit() {
    let mut map = HashMap::new();
    map.insert("FAREALERT_SIBLING_SCAN_LIMIT", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FAREALERT_SIBLING_SCAN_LIMIT"),
        "expected InvalidEnvVar(FAREALERT_SIBLING_SCAN_LIMIT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_tracking_prefix() {
    let mut map = HashMap::new();
    map.insert("FAREALERT_TRACKING_LINK_PREFIX", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FAREALERT_TRACKING_LINK_PREFIX"),
        "expected InvalidEnvVar(FAREALERT_TRACKING_LINK_PREFIX), got: {result:?}"
    );
}
