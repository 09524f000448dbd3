//! 設定ファイルのテスト

use gherkin_review::config::Config;
use tempfile::tempdir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config, Config::default());
    assert_eq!(config.timeout_seconds, 10);
    let client = config.client_config(None);
    assert_eq!(client.base_url, "http://localhost:8000/api/v1");
    assert_eq!(client.timeout_ms, 10_000);
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        api_base_url: Some("http://review.local/api/v1/".to_string()),
        timeout_seconds: 3,
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded, config);

    let client = loaded.client_config(None);
    assert_eq!(client.base_url, "http://review.local/api/v1");
    assert_eq!(client.timeout_ms, 3_000);
}

#[test]
fn test_flag_overrides_file() {
    let config = Config {
        api_base_url: Some("http://from-file/api/v1".to_string()),
        timeout_seconds: 0,
    };

    let client = config.client_config(Some("http://from-flag/api/v1"));
    assert_eq!(client.base_url, "http://from-flag/api/v1");
    assert_eq!(client.timeout_ms, 1_000);

    // 空文字は無視
    assert_eq!(config.client_config(Some("  ")).base_url, "http://from-file/api/v1");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_base_url": "http://x/api"}"#).unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.api_base_url.as_deref(), Some("http://x/api"));
    assert_eq!(config.timeout_seconds, 10);
}

#[test]
fn test_broken_file_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_broken_file_can_be_overwritten() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    let mut config = Config::load_from_or_default(&path);
    assert_eq!(config, Config::default());

    config.api_base_url = Some("http://fixed/api/v1".to_string());
    config.save_to(&path).expect("保存失敗");

    let reloaded = Config::load_from(&path).expect("上書き後は読めるべき");
    assert_eq!(reloaded.api_base_url.as_deref(), Some("http://fixed/api/v1"));
}
