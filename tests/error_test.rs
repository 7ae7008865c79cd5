//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use neural_detect::error::NeuralDetectError;
use neural_detect::ImageFile;
use neural_detect_common::AnalyzeError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを開いた場合
#[test]
fn test_open_nonexistent_file() {
    let result = ImageFile::open(Path::new("/nonexistent/path/12345/parcel.jpg"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, NeuralDetectError::FileNotFound(_)));
}

/// フォルダを画像として開いた場合
#[test]
fn test_open_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = ImageFile::open(dir.path()).unwrap_err();
    assert!(matches!(err, NeuralDetectError::FileNotFound(_)));
}

/// NeuralDetectErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        NeuralDetectError::Config("テスト設定エラー".to_string()),
        NeuralDetectError::FileNotFound("parcel.jpg".to_string()),
        NeuralDetectError::HttpClient("TLS初期化失敗".to_string()),
        NeuralDetectError::Analyze(AnalyzeError::NoFileSelected),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 解析エラーはサーバーのメッセージをそのまま含む
#[test]
fn test_analyze_error_display_keeps_server_message() {
    let err: NeuralDetectError = AnalyzeError::Server {
        status: 500,
        message: "model unavailable".to_string(),
    }
    .into();
    assert_eq!(err.to_string(), "解析エラー: model unavailable");
}

/// IOエラーからの変換
#[test]
fn test_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let err: NeuralDetectError = io_error.into();
    assert!(matches!(err, NeuralDetectError::Io(_)));
    assert!(err.to_string().contains("access denied"));
}

/// JSONエラーからの変換
#[test]
fn test_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: NeuralDetectError = json_error.into();
    assert!(matches!(err, NeuralDetectError::JsonParse(_)));
}
