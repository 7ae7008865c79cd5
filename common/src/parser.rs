//! /predict レスポンスパーサー
//!
//! ステータスコードとボディから予測結果またはエラーを組み立てる

use serde_json::Value;

use crate::error::{AnalyzeError, Result, UNKNOWN_SERVER_ERROR};
use crate::types::{Prediction, RawResponse};

/// レスポンスを解釈
///
/// # Returns
/// * `Ok(Prediction)` - 2xxかつ期待した形のJSON
/// * `Err(AnalyzeError::Server)` - 2xx以外
/// * `Err(AnalyzeError::MalformedResponse)` - 2xxだがJSONの形が違う
pub fn interpret_response(response: &RawResponse) -> Result<Prediction> {
    if !response.is_success() {
        return Err(AnalyzeError::Server {
            status: response.status,
            message: server_error_message(response.status, &response.body),
        });
    }

    parse_prediction(&response.body)
}

/// 成功レスポンスのボディをパース
///
/// 余分なフィールドは無視する。predictionとconfidenceは文字列必須
pub fn parse_prediction(body: &str) -> Result<Prediction> {
    serde_json::from_str::<Prediction>(body.trim())
        .map_err(|e| AnalyzeError::MalformedResponse(e.to_string()))
}

/// エラーレスポンスのボディからメッセージを取り出す
///
/// 抽出優先順位:
/// 1. `{"error": "..."}` の文字列（空でないもの）
/// 2. JSONとして読めるがerrorが無い → ステータスコード付きメッセージ
/// 3. JSONとして読めない → 既定メッセージ
pub fn server_error_message(status: u16, body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body.trim()) else {
        return UNKNOWN_SERVER_ERROR.to_string();
    };

    value
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Server responded with status: {}", status))
}
