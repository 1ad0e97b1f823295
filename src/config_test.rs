use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, WidgetConfig::default());
    assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    assert!(!cfg.require_lead_form);
    assert_eq!(cfg.contact_url, None);
    assert_eq!(cfg.timeouts, Timeouts { request_secs: None, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS });
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[
        ("CHATBOT_ENDPOINT", "https://bot.example.test/chatbot-web"),
        ("CHATBOT_REQUIRE_LEAD_FORM", "true"),
        ("CHATBOT_CONTACT_URL", "https://wa.me/50200000000"),
        ("CHATBOT_REQUEST_TIMEOUT_SECS", "30"),
        ("CHATBOT_CONNECT_TIMEOUT_SECS", "3"),
    ]))
    .unwrap();
    assert_eq!(cfg.endpoint, "https://bot.example.test/chatbot-web");
    assert!(cfg.require_lead_form);
    assert_eq!(cfg.contact_url.as_deref(), Some("https://wa.me/50200000000"));
    assert_eq!(cfg.timeouts, Timeouts { request_secs: Some(30), connect_secs: 3 });
}

#[test]
fn from_lookup_blank_endpoint_uses_default() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[("CHATBOT_ENDPOINT", "  ")])).unwrap();
    assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn from_lookup_invalid_timeouts_fall_back() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[
        ("CHATBOT_REQUEST_TIMEOUT_SECS", "soon"),
        ("CHATBOT_CONNECT_TIMEOUT_SECS", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts, Timeouts::default());
}

#[test]
fn from_lookup_invalid_bool_errors() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("CHATBOT_REQUIRE_LEAD_FORM", "maybe")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("CHATBOT_REQUIRE_LEAD_FORM"));
    assert!(err.contains("maybe"));
}

#[test]
fn parse_bool_accepts_common_spellings() {
    assert!(parse_bool("K", "1").unwrap());
    assert!(parse_bool("K", " TRUE ").unwrap());
    assert!(!parse_bool("K", "0").unwrap());
    assert!(!parse_bool("K", "no").unwrap());
}

#[test]
fn from_lookup_zero_request_timeout_is_unset() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[("CHATBOT_REQUEST_TIMEOUT_SECS", "0")])).unwrap();
    assert_eq!(cfg.timeouts.request_secs, None);
}

#[test]
fn parse_bool_accepts_documented_spellings() {
    for raw in ["true", "1", "yes", "YES"] {
        assert!(parse_bool("K", raw).unwrap(), "{raw}");
    }
    for raw in ["false", "0", "no", ""] {
        assert!(!parse_bool("K", raw).unwrap(), "{raw:?}");
    }
    assert!(parse_bool("K", "on").is_err());
}
