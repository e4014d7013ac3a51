use super::*;

#[test]
fn defaults_match_event_setup() {
    let config = GuestbookConfig::default();
    assert_eq!(config.record_endpoint, DEFAULT_RECORD_ENDPOINT);
    assert_eq!(config.default_name, "드림대학");
    assert_eq!(config.default_message, "너희의 꿈을 응원해!");
    assert_eq!(config.name_max_len, 10);
    assert_eq!(config.max_entries, 20);
    assert_eq!(config.skin, CardSkin::Compact);
    assert!(!config.debug);
}

#[test]
fn build_env_overrides_endpoint_and_skin() {
    let mut config = GuestbookConfig::default();
    let result = config.apply_build_env(Some("https://example.test/sheet/"), Some("large"));
    assert_eq!(result, Ok(()));
    assert_eq!(config.record_endpoint, "https://example.test/sheet");
    assert_eq!(config.skin, CardSkin::Large);
}

#[test]
fn blank_build_env_keeps_defaults() {
    let mut config = GuestbookConfig::default();
    assert_eq!(config.apply_build_env(Some("  "), None), Ok(()));
    assert_eq!(config, GuestbookConfig::default());
}

#[test]
fn unknown_build_skin_is_an_error_but_endpoint_still_applies() {
    let mut config = GuestbookConfig::default();
    let result = config.apply_build_env(Some("https://example.test"), Some("poster"));
    assert_eq!(result, Err(ConfigError::UnknownSkin("poster".to_owned())));
    assert_eq!(config.record_endpoint, "https://example.test");
    assert_eq!(config.skin, CardSkin::Compact);
}

#[test]
fn query_sets_skin_and_debug() {
    let mut config = GuestbookConfig::default();
    assert_eq!(config.apply_query("?skin=large&debug=1"), None);
    assert_eq!(config.skin, CardSkin::Large);
    assert!(config.debug);
    assert_eq!(config.message_max_len(), 40);
}

#[test]
fn query_ignores_unknown_keys_and_empty_pairs() {
    let mut config = GuestbookConfig::default();
    assert_eq!(config.apply_query("?&utm=x&&debug=true"), None);
    assert!(config.debug);
    assert_eq!(config.skin, CardSkin::Compact);
}

#[test]
fn query_with_unknown_skin_reports_and_keeps_current() {
    let mut config = GuestbookConfig::default();
    let rejected = config.apply_query("skin=banner");
    assert_eq!(rejected, Some(ConfigError::UnknownSkin("banner".to_owned())));
    assert_eq!(config.skin, CardSkin::Compact);
}

#[test]
fn empty_query_changes_nothing() {
    let mut config = GuestbookConfig::default();
    assert_eq!(config.apply_query(""), None);
    assert_eq!(config, GuestbookConfig::default());
}

#[test]
fn query_values_are_percent_decoded() {
    let mut config = GuestbookConfig::default();
    assert_eq!(config.apply_query("?skin=%6Carge&debug=%31"), None);
    assert_eq!(config.skin, CardSkin::Large);
    assert!(config.debug);
}

#[test]
fn undecodable_query_value_is_kept_as_written() {
    let mut config = GuestbookConfig::default();
    let rejected = config.apply_query("?skin=%FF");
    assert_eq!(rejected, Some(ConfigError::UnknownSkin("%ff".to_owned())));
    assert_eq!(config.skin, CardSkin::Compact);
}
