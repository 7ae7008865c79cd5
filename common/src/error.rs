//! エラー型定義

use thiserror::Error;

/// 画像未選択時のメッセージ
pub const NO_FILE_MESSAGE: &str = "Please select an image file first.";

/// エラーボディを解釈できなかった場合のメッセージ
pub const UNKNOWN_SERVER_ERROR: &str = "An unknown server error occurred.";

/// 通信エラーにメッセージが無い場合のメッセージ
pub const ANALYZE_FAILED_MESSAGE: &str =
    "Failed to analyze the image. Please ensure the backend server is running.";

/// 解析1回分のエラー
///
/// Displayはそのまま画面に表示するメッセージになる
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// 画像が選択されていない（通信は行わない）
    #[error("{}", NO_FILE_MESSAGE)]
    NoFileSelected,

    /// リクエスト送信・レスポンス受信の失敗
    #[error("{0}")]
    Transport(String),

    /// サーバーが2xx以外を返した
    #[error("{message}")]
    Server { status: u16, message: String },

    /// 2xxだが期待した形のJSONではない
    #[error("Malformed response from server: {0}")]
    MalformedResponse(String),
}

impl AnalyzeError {
    /// 通信エラーを作成（メッセージが空なら既定メッセージ）
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            AnalyzeError::Transport(ANALYZE_FAILED_MESSAGE.to_string())
        } else {
            AnalyzeError::Transport(message)
        }
    }

    /// サーバーが返したHTTPステータス
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalyzeError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, AnalyzeError>;
