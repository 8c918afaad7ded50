use std::collections::HashMap;
use std::time::Duration;

use swasthya_api::Config;
use swasthya_api::config::{ConfigError, load_env_file};

fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|var| vars.get(var).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(config.gemini_api_key, None);
    assert_eq!(config.gemini_model, "gemini-flash-latest");
    assert_eq!(
        config.overpass_url.as_deref(),
        Some("https://overpass-api.de/api/interpreter")
    );
    assert_eq!(config.data_dir.to_str(), Some("./data"));
    assert_eq!(config.http_timeout, Duration::from_secs(30));
}

#[test]
fn values_are_read_and_trimmed() {
    let config = config_from(&[
        ("SWASTHYA_BIND_ADDR", "127.0.0.1:8080"),
        ("GEMINI_API_KEY", " secret "),
        ("GEMINI_MODEL", "gemini-pro"),
        ("SWASTHYA_DATA_DIR", "/var/lib/swasthya"),
        ("SWASTHYA_HTTP_TIMEOUT_SECS", "5"),
    ])
    .unwrap();

    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
    assert_eq!(config.gemini_model, "gemini-pro");
    assert_eq!(config.data_dir.to_str(), Some("/var/lib/swasthya"));
    assert_eq!(config.http_timeout, Duration::from_secs(5));
}

#[test]
fn blank_api_key_counts_as_missing() {
    let config = config_from(&[("GEMINI_API_KEY", "  ")]).unwrap();
    assert_eq!(config.gemini_api_key, None);
}

#[test]
fn blank_overpass_url_disables_live_lookup() {
    let config = config_from(&[("OVERPASS_URL", "")]).unwrap();
    assert_eq!(config.overpass_url, None);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(config_from(&[("SWASTHYA_BIND_ADDR", "not-an-addr")]).is_err());
    assert!(config_from(&[("SWASTHYA_HTTP_TIMEOUT_SECS", "0")]).is_err());
    assert!(config_from(&[("SWASTHYA_HTTP_TIMEOUT_SECS", "soon")]).is_err());
}

#[test]
fn missing_env_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!load_env_file(&dir.path().join(".env")).unwrap());
}

#[test]
fn env_file_values_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "SWASTHYA_TEST_ENV_FILE_VALUE=loaded\n").unwrap();

    assert!(load_env_file(&path).unwrap());
    assert_eq!(
        std::env::var("SWASTHYA_TEST_ENV_FILE_VALUE").as_deref(),
        Ok("loaded")
    );
}

#[test]
fn malformed_env_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "this line has no equals sign\n").unwrap();

    let err = load_env_file(&path).unwrap_err();
    assert!(!matches!(err, dotenvy::Error::Io(_)), "{err}");
}
