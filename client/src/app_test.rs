use board::skin::CardSkin;

use super::*;

#[test]
fn no_overrides_keeps_defaults() {
    let (config, rejected) = resolve_config(None, None, "");
    assert_eq!(config, GuestbookConfig::default());
    assert!(rejected.is_empty());
}

#[test]
fn query_skin_beats_build_skin() {
    let (config, rejected) = resolve_config(None, Some("compact"), "?skin=large");
    assert_eq!(config.skin, CardSkin::Large);
    assert!(rejected.is_empty());
}

#[test]
fn build_endpoint_is_used() {
    let (config, _) = resolve_config(Some("https://sheets.example/api/"), None, "");
    assert_eq!(config.record_endpoint, "https://sheets.example/api");
}

#[test]
fn every_rejected_override_is_reported() {
    let (config, rejected) = resolve_config(None, Some("huge"), "?skin=tiny&debug=1");
    assert_eq!(config.skin, CardSkin::default());
    assert!(config.debug);
    assert_eq!(
        rejected,
        vec![ConfigError::UnknownSkin("huge".to_owned()), ConfigError::UnknownSkin("tiny".to_owned())]
    );
}
