//! 推論エンドポイントへの送信

use crate::error::AnalyzeError;
use crate::types::RawResponse;

/// 既定の推論エンドポイント
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";

/// 画像を /predict へ送るトランスポート
///
/// 実装は `FILE_FIELD` を名前とするmultipartで1回だけPOSTし、
/// ステータスとボディをそのまま返す。ボディの解釈は `parser` 側で行う
#[allow(async_fn_in_trait)]
pub trait PredictionTransport<F> {
    async fn send(&self, file: &F) -> Result<RawResponse, AnalyzeError>;
}
