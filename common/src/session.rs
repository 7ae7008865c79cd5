//! 画面の状態管理
//!
//! 選択中の画像・プレビュー・解析状態をひとつのオブジェクトで持つ。
//! 表示状態（待機/解析中/エラー/結果）は `Activity` で排他的に表現する

use crate::error::AnalyzeError;
use crate::parser::interpret_response;
use crate::transport::PredictionTransport;
use crate::types::{Prediction, RawResponse};
use crate::upload::ImageSource;

/// 解析の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Loading,
    Failed(AnalyzeError),
    Succeeded(Prediction),
}

/// アップロード画面の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ReadyToAnalyze,
    Loading,
    ShowingResult,
    ShowingError,
}

/// 選択中の画像とプレビュー
pub struct Selection<F: ImageSource> {
    file: F,
    preview: Option<F::Preview>,
}

impl<F: ImageSource> Selection<F> {
    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn preview(&self) -> Option<&F::Preview> {
        self.preview.as_ref()
    }
}

/// 1画面分の状態
pub struct Session<F: ImageSource> {
    selection: Option<Selection<F>>,
    activity: Activity,
}

impl<F: ImageSource> Default for Session<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ImageSource> Session<F> {
    pub fn new() -> Self {
        Self {
            selection: None,
            activity: Activity::Idle,
        }
    }

    /// 画像を選択
    ///
    /// 画像以外は何も変更せずfalseを返す。
    /// 受け付けた場合は以前のプレビューを解放し、結果とエラーを消す
    pub fn select_file(&mut self, file: F) -> bool {
        if !file.is_image() {
            log::debug!("画像以外のファイルを無視: {} ({})", file.file_name(), file.media_type());
            return false;
        }

        let preview = file.create_preview();
        if preview.is_none() {
            log::warn!("プレビューを作成できません: {}", file.file_name());
        }
        log::debug!("画像を選択: {}", file.file_name());

        // 古いプレビューはここでDropされる
        self.selection = Some(Selection { file, preview });
        self.clear_outcome();
        true
    }

    /// 解析開始
    ///
    /// 画像が無ければエラーを設定してNone。
    /// あれば解析中にして送信すべきファイルを返す
    pub fn begin_analysis(&mut self) -> Option<&F> {
        if self.selection.is_none() {
            self.activity = Activity::Failed(AnalyzeError::NoFileSelected);
            return None;
        }

        self.activity = Activity::Loading;
        self.selection.as_ref().map(|selection| &selection.file)
    }

    /// 解析完了
    ///
    /// 成功・失敗どちらでも解析中フラグはここで必ず落ちる
    pub fn complete_analysis(&mut self, response: Result<RawResponse, AnalyzeError>) {
        let outcome = response.and_then(|response| interpret_response(&response));
        self.activity = match outcome {
            Ok(prediction) => {
                log::info!("解析完了: {} ({})", prediction.prediction, prediction.confidence);
                Activity::Succeeded(prediction)
            }
            Err(error) => {
                log::warn!("解析エラー: {}", error);
                Activity::Failed(error)
            }
        };
    }

    /// 選択中の画像を送信して結果を反映
    pub async fn analyze<T>(&mut self, transport: &T) -> &Activity
    where
        T: PredictionTransport<F>,
    {
        if self.begin_analysis().is_none() {
            return &self.activity;
        }

        let response = match &self.selection {
            Some(selection) => transport.send(&selection.file).await,
            None => Err(AnalyzeError::NoFileSelected),
        };
        self.complete_analysis(response);
        &self.activity
    }

    /// 画像・プレビュー・結果・エラーをすべて消す
    pub fn reset(&mut self) {
        self.selection = None;
        self.clear_outcome();
    }

    /// 結果とエラーを消す（解析中はそのまま）
    fn clear_outcome(&mut self) {
        if !self.is_loading() {
            self.activity = Activity::Idle;
        }
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn stage(&self) -> Stage {
        match &self.activity {
            Activity::Loading => Stage::Loading,
            Activity::Failed(_) => Stage::ShowingError,
            Activity::Succeeded(_) => Stage::ShowingResult,
            Activity::Idle if self.selection.is_some() => Stage::ReadyToAnalyze,
            Activity::Idle => Stage::Idle,
        }
    }

    pub fn selection(&self) -> Option<&Selection<F>> {
        self.selection.as_ref()
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selection.as_ref().map(Selection::file)
    }

    /// 解析・リセットの操作を出すかどうか（プレビューの有無は問わない）
    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    pub fn preview(&self) -> Option<&F::Preview> {
        self.selection.as_ref().and_then(Selection::preview)
    }

    pub fn has_preview(&self) -> bool {
        self.preview().is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.activity, Activity::Loading)
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match &self.activity {
            Activity::Succeeded(prediction) => Some(prediction),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AnalyzeError> {
        match &self.activity {
            Activity::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}
