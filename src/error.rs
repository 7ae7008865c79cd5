use neural_detect_common::AnalyzeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeuralDetectError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("解析エラー: {0}")]
    Analyze(#[from] AnalyzeError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NeuralDetectError>;
