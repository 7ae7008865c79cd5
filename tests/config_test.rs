//! 設定ファイルテスト

use neural_detect::{Config, HttpTransport};
use neural_detect_common::DEFAULT_ENDPOINT;
use tempfile::tempdir;

#[test]
fn test_default_endpoint() {
    let config = Config::default();
    assert_eq!(config.endpoint, "http://localhost:5000/predict");
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.timeout_seconds, 0);
}

#[test]
fn test_load_missing_file_gives_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("load failed");
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");
    let config = Config {
        endpoint: "http://192.168.1.20:5000/predict".to_string(),
        timeout_seconds: 30,
    };

    config.save_to(&path).expect("save failed");
    let loaded = Config::load_from(&path).expect("load failed");

    assert_eq!(loaded, config);
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 10}"#).unwrap();

    let config = Config::load_from(&path).expect("load failed");
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.timeout_seconds, 10);
}

#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// 壊れた設定ファイルは既定値に置き換えて上書き保存できる
#[test]
fn test_invalid_json_falls_back_and_can_be_repaired() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut config = Config::load_or_default_from(&path);
    assert_eq!(config, Config::default());

    config.endpoint = "http://10.0.0.5:5000/predict".to_string();
    config.save_to(&path).expect("save failed");

    let repaired = Config::load_from(&path).expect("load failed");
    assert_eq!(repaired.endpoint, "http://10.0.0.5:5000/predict");
}

#[test]
fn test_endpoint_priority() {
    let config = Config {
        endpoint: "http://file:5000/predict".to_string(),
        timeout_seconds: 0,
    };

    assert_eq!(config.endpoint_with(None, None), "http://file:5000/predict");
    assert_eq!(
        config.endpoint_with(None, Some("http://env:5000/predict")),
        "http://env:5000/predict"
    );
    assert_eq!(
        config.endpoint_with(Some("http://flag:5000/predict"), Some("http://env:5000/predict")),
        "http://flag:5000/predict"
    );
}

#[test]
fn test_blank_override_is_ignored() {
    let config = Config::default();
    assert_eq!(
        config.endpoint_with(Some("  "), Some("http://env:5000/predict")),
        "http://env:5000/predict"
    );
    assert_eq!(config.endpoint_with(Some(""), Some("")), DEFAULT_ENDPOINT);
}

#[test]
fn test_transport_uses_override() {
    let config = Config {
        endpoint: "http://file:5000/predict".to_string(),
        timeout_seconds: 15,
    };
    let transport =
        HttpTransport::from_config(&config, Some("http://flag:5000/predict")).expect("client build failed");
    assert_eq!(transport.endpoint(), "http://flag:5000/predict");
}
