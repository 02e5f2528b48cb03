//! Configuration module tests

use llmcli::config::settings::LoggingConfig;
use llmcli::config::AppConfig;
use llmcli::ConfigError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const VALID_CONFIG: &str = r#"
credential = "sk-or-v1-abcdef"
endpoint = "https://openrouter.ai/api/v1/chat/completions"
default_model = "fast"
timeout_secs = 45

[model_alias]
fast = "vendor/model-x"
"gpt-3.5" = "openai/gpt-3.5-turbo"
"#;

#[test]
fn test_load_valid_config() {
    let file = write_config(VALID_CONFIG);
    let config = AppConfig::load(file.path()).unwrap();

    assert_eq!(config.credential, "sk-or-v1-abcdef");
    assert_eq!(config.endpoint, "https://openrouter.ai/api/v1/chat/completions");
    assert_eq!(config.default_model, "fast");
    assert_eq!(config.timeout_secs, 45);
    assert_eq!(config.timeout().as_secs(), 45);
    assert_eq!(config.model_alias.get("fast").map(String::as_str), Some("vendor/model-x"));
}

#[test]
fn test_alias_table_is_optional() {
    let file = write_config(
        r#"
credential = "k"
endpoint = "http://localhost:8080/v1/chat/completions"
default_model = "vendor/model"
"#,
    );
    let config = AppConfig::load(file.path()).unwrap();

    assert!(config.model_alias.is_empty());
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.resolve_model(None), "vendor/model");
}

#[test]
fn test_alias_resolution() {
    let file = write_config(VALID_CONFIG);
    let config = AppConfig::load(file.path()).unwrap();

    assert_eq!(config.resolve_model(Some("fast")), "vendor/model-x");
    assert_eq!(config.resolve_model(Some("gpt-3.5")), "openai/gpt-3.5-turbo");
    // Exact match only
    assert_eq!(config.resolve_model(Some("fast-2")), "fast-2");
    assert_eq!(config.resolve_model(Some("vendor/model-x")), "vendor/model-x");
}

#[test]
fn test_mixed_case_alias_keys() {
    let file = write_config(
        r#"
credential = "sk-or-test-key"
endpoint = "https://openrouter.ai/api/v1/chat/completions"
default_model = "GPT-Fast"

[model_alias]
GPT-Fast = "vendor/model-x"
"#,
    );
    let config = AppConfig::load(file.path()).unwrap();

    assert!(config.model_alias.contains_key("GPT-Fast"));
    assert_eq!(config.resolve_model(None), "vendor/model-x");
    assert_eq!(config.resolve_model(Some("GPT-Fast")), "vendor/model-x");
    // Lookup stays exact
    assert_eq!(config.resolve_model(Some("gpt-fast")), "gpt-fast");
}

#[test]
fn test_missing_required_field() {
    for missing in ["credential", "endpoint", "default_model"] {
        let content: String = [
            "credential = \"k\"",
            "endpoint = \"https://example.com\"",
            "default_model = \"m\"",
        ]
        .iter()
        .filter(|line| !line.starts_with(missing))
        .map(|line| format!("{}\n", line))
        .collect();

        let file = write_config(&content);
        let result = AppConfig::load(file.path());
        assert!(
            matches!(result, Err(ConfigError::Parse { .. })),
            "missing {} should fail to parse",
            missing
        );
    }
}

#[test]
fn test_invalid_toml() {
    let file = write_config("credential = \n[[[");
    assert!(matches!(AppConfig::load(file.path()), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_validation_errors() {
    let cases = [
        "credential = \"\"\nendpoint = \"https://x\"\ndefault_model = \"m\"\n",
        "credential = \"two words\"\nendpoint = \"https://x\"\ndefault_model = \"m\"\n",
        "credential = \"k\"\nendpoint = \"ftp://x\"\ndefault_model = \"m\"\n",
        "credential = \"k\"\nendpoint = \"https://x\"\ndefault_model = \" \"\n",
        "credential = \"k\"\nendpoint = \"https://x\"\ndefault_model = \"m\"\n[model_alias]\nfast = \"\"\n",
    ];

    for content in cases {
        let file = write_config(content);
        let result = AppConfig::load(file.path());
        assert!(
            matches!(result, Err(ConfigError::Invalid(_))),
            "config {:?} should be invalid",
            content
        );
    }
}

#[test]
fn test_explicit_missing_path() {
    let path = Path::new("/nonexistent/dir/config.toml");
    match AppConfig::load_from(Some(path)) {
        Err(ConfigError::NotFound { searched }) => assert_eq!(searched, vec![path.to_path_buf()]),
        other => panic!("Expected not found error, got {:?}", other),
    }
}

#[test]
fn test_default_paths() {
    let paths = AppConfig::default_paths();

    assert_eq!(paths.last().unwrap(), Path::new("config.toml"));
    if paths.len() == 2 {
        assert!(paths[0].ends_with(".config/llmcli/config.toml"));
    }
}

#[test]
fn test_logging_defaults() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "warn");
    assert_eq!(logging.format, "text");
}
