use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_to_openrouter() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "sk-or")])).unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::OpenAi);
    assert_eq!(cfg.api_key, "sk-or");
    assert_eq!(cfg.model, "gpt-3.5-turbo");
    assert_eq!(cfg.base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(cfg.attribution, Attribution { referer: None, title: DEFAULT_APP_TITLE.to_owned() });
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn parses_overrides() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "OPENAI_API_KEY"),
        ("OPENAI_API_KEY", "sk-test"),
        ("LLM_MODEL", "gpt-4o-mini"),
        ("LLM_BASE_URL", "https://api.openai.com/v1/"),
        ("LLM_HTTP_REFERER", "https://journeycraft.example"),
        ("LLM_APP_TITLE", "JourneyCraft"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_key, "sk-test");
    assert_eq!(cfg.model, "gpt-4o-mini");
    assert_eq!(cfg.base_url, "https://api.openai.com/v1");
    assert_eq!(cfg.attribution.referer.as_deref(), Some("https://journeycraft.example"));
    assert_eq!(cfg.attribution.title, "JourneyCraft");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn anthropic_uses_its_own_key_and_model() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("LLM_PROVIDER", "anthropic"), ("ANTHROPIC_API_KEY", "sk-ant")]))
        .unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Anthropic);
    assert_eq!(cfg.api_key, "sk-ant");
    assert_eq!(cfg.model, "claude-sonnet-4-5-20250929");
}

#[test]
fn missing_key_names_the_variable() {
    let err = LlmConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(&err, LlmError::MissingApiKey { var } if var == "OPENROUTER_API_KEY"));
}

#[test]
fn blank_key_counts_as_missing() {
    let err = LlmConfig::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "  ")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}

#[test]
fn unknown_provider_errors() {
    let err = LlmConfig::from_lookup(lookup_from(&[("LLM_PROVIDER", "bad"), ("OPENROUTER_API_KEY", "k")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("unknown LLM_PROVIDER"));
}

#[test]
fn bad_timeout_falls_back_to_default() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("OPENROUTER_API_KEY", "k"),
        ("LLM_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
}
