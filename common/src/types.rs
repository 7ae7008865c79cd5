//! 予測結果の型定義
//!
//! ブラウザ・CLI・デスクトップで共有される型:
//! - Prediction: /predict の成功レスポンス
//! - Verdict: 表示用の判定（破損 / 破損なし）
//! - RawResponse: トランスポートが受け取った生レスポンス

use serde::{Deserialize, Serialize};

/// サーバーが「破損」を表すラベル
pub const DAMAGED_LABEL: &str = "damaged";

/// /predict の成功レスポンス
///
/// confidenceはサーバーが整形済みの文字列（例: "92.31%"）をそのまま保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: String,
}

/// 判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Damaged,
    NotDamaged,
}

impl Verdict {
    /// ラベルから判定（"damaged"以外はすべて破損なし）
    pub fn from_label(label: &str) -> Self {
        if label == DAMAGED_LABEL {
            Verdict::Damaged
        } else {
            Verdict::NotDamaged
        }
    }

    pub fn is_damaged(&self) -> bool {
        matches!(self, Verdict::Damaged)
    }

    /// CSSクラス名
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Damaged => "damaged",
            Verdict::NotDamaged => "not-damaged",
        }
    }
}

impl Prediction {
    pub fn new(prediction: impl Into<String>, confidence: impl Into<String>) -> Self {
        Self {
            prediction: prediction.into(),
            confidence: confidence.into(),
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_label(&self.prediction)
    }

    /// 表示用ラベル（先頭だけ大文字）
    pub fn display_label(&self) -> String {
        capitalize_first(&self.prediction)
    }
}

/// 先頭1文字を大文字にする
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// トランスポートが受け取ったレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
