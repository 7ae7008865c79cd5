//! アップロード・結果表示コンポーネント
//!
//! 状態は親(App)が持ち、ここではドラッグ中フラグだけを持つ

use leptos::prelude::*;
use neural_detect_common::{is_image_media_type, Prediction};
use web_sys::{DragEvent, File, HtmlInputElement};

/// ファイル選択ダイアログで受け付ける形式
const ACCEPTED_TYPES: &str = "image/png, image/jpeg, image/jpg";

/// 結果エリアに出すもの（優先順: 解析中 > エラー > 結果）
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPanel {
    Loader,
    Error(String),
    Result(Prediction),
    Empty,
}

impl ResultPanel {
    pub fn select(is_loading: bool, error: Option<String>, prediction: Option<Prediction>) -> Self {
        if is_loading {
            return ResultPanel::Loader;
        }
        if let Some(message) = error {
            return ResultPanel::Error(message);
        }
        match prediction {
            Some(prediction) => ResultPanel::Result(prediction),
            None => ResultPanel::Empty,
        }
    }
}

/// ドロップゾーンに出すもの
///
/// 選択済みでもプレビューが作れない場合はファイル名だけ出す
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropZoneContent {
    Preview(String),
    Unavailable(String),
    Prompt,
}

impl DropZoneContent {
    pub fn select(preview_url: Option<String>, file_name: Option<String>) -> Self {
        match (preview_url, file_name) {
            (Some(url), _) => DropZoneContent::Preview(url),
            (None, Some(name)) => DropZoneContent::Unavailable(name),
            (None, None) => DropZoneContent::Prompt,
        }
    }
}

fn drop_zone_class(is_dragging: bool) -> &'static str {
    if is_dragging {
        "drop-zone drag-active"
    } else {
        "drop-zone"
    }
}

#[component]
pub fn ImageUploader<FS, FA, FR>(
    on_file_select: FS,
    #[prop(into)] preview_url: Signal<Option<String>>,
    #[prop(into)] file_name: Signal<Option<String>>,
    on_analyze: FA,
    on_reset: FR,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] prediction: Signal<Option<Prediction>>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView
where
    FS: Fn(File) + 'static + Clone + Send + Sync,
    FA: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let (is_dragging, set_is_dragging) = signal(false);
    let has_selection = move || file_name.with(Option::is_some);

    // 画像以外は何も言わずに無視する
    let handle_file = move |file: File| {
        if is_image_media_type(&file.type_()) {
            on_file_select(file);
        } else {
            log::debug!("画像以外のファイルを無視: {} ({})", file.name(), file.type_());
        }
    };

    let on_change = {
        let handle_file = handle_file.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                handle_file(file);
            }
            // 同じファイルを選び直してもchangeが発火するように
            input.set_value("");
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            handle_file(file);
        }
    };

    let result_panel = move || {
        match ResultPanel::select(is_loading.get(), error.get(), prediction.get()) {
            ResultPanel::Loader => view! { <Loader /> }.into_any(),
            ResultPanel::Error(message) => view! {
                <div class="error-panel">
                    <strong>"Analysis Error"</strong>
                    <p>{message}</p>
                </div>
            }
            .into_any(),
            ResultPanel::Result(prediction) => view! { <PredictionResult prediction=prediction /> }.into_any(),
            ResultPanel::Empty => ().into_any(),
        }
    };

    view! {
        <div class="uploader">
            <div class="uploader-title">
                <h2>"Package Damage Detection"</h2>
                <p class="text-muted">
                    "Upload an image of your postal package to get instant AI-powered damage assessment."
                </p>
            </div>

            <div
                class=move || drop_zone_class(is_dragging.get())
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <input
                    type="file"
                    id="imageUpload"
                    class="hidden"
                    accept=ACCEPTED_TYPES
                    on:change=on_change
                />

                {move || match DropZoneContent::select(preview_url.get(), file_name.get()) {
                    DropZoneContent::Preview(url) => view! {
                        <div class="preview">
                            <img src=url alt="Package preview" />
                        </div>
                    }
                    .into_any(),
                    DropZoneContent::Unavailable(name) => view! {
                        <div class="preview preview-unavailable">
                            <p>"Preview unavailable"</p>
                            <p class="text-muted">{name}</p>
                        </div>
                    }
                    .into_any(),
                    DropZoneContent::Prompt => ().into_any(),
                }}

                <label for="imageUpload" class="drop-prompt" class:hidden=has_selection>
                    <div class="upload-icon">"⬆"</div>
                    <h3>"Drop your image here"</h3>
                    <p class="text-muted">"or click to browse files"</p>
                    <div class="formats">
                        <span>"PNG"</span>
                        <span>"JPG"</span>
                        <span>"JPEG"</span>
                    </div>
                </label>
            </div>

            <div class="actions" class:hidden=move || !has_selection()>
                <button
                    class="btn btn-primary"
                    disabled=move || is_loading.get()
                    on:click={
                        let on_analyze = on_analyze.clone();
                        move |_| on_analyze(())
                    }
                >
                    {move || if is_loading.get() { "Analyzing..." } else { "Analyze Package" }}
                </button>

                <button
                    class="btn btn-secondary"
                    disabled=move || is_loading.get()
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Reset"
                </button>
            </div>

            <div class="results">{result_panel}</div>
        </div>
    }
}

#[component]
fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="spinner" />
            <p>"Analyzing your package..."</p>
        </div>
    }
}

#[component]
fn PredictionResult(prediction: Prediction) -> impl IntoView {
    let verdict = prediction.verdict();
    let icon = if verdict.is_damaged() { "⚠" } else { "✔" };

    view! {
        <div class=format!("result-card {}", verdict.as_str())>
            <div class="result-icon">{icon}</div>
            <h3>"Analysis Complete"</h3>
            <p class="result-label">{prediction.display_label()}</p>
            <p class="result-confidence">"Confidence: " {prediction.confidence}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_panel_loading_wins() {
        let panel = ResultPanel::select(
            true,
            Some("stale".to_string()),
            Some(Prediction::new("damaged", "92%")),
        );
        assert_eq!(panel, ResultPanel::Loader);
    }

    #[test]
    fn test_result_panel_error_before_result() {
        let panel = ResultPanel::select(
            false,
            Some("model unavailable".to_string()),
            Some(Prediction::new("damaged", "92%")),
        );
        assert_eq!(panel, ResultPanel::Error("model unavailable".to_string()));
    }

    #[test]
    fn test_result_panel_result() {
        let panel = ResultPanel::select(false, None, Some(Prediction::new("intact", "80%")));
        assert_eq!(panel, ResultPanel::Result(Prediction::new("intact", "80%")));
    }

    #[test]
    fn test_result_panel_empty() {
        assert_eq!(ResultPanel::select(false, None, None), ResultPanel::Empty);
    }

    #[test]
    fn test_drop_zone_shows_preview() {
        let content = DropZoneContent::select(Some("blob:box".to_string()), Some("box.png".to_string()));
        assert_eq!(content, DropZoneContent::Preview("blob:box".to_string()));
    }

    #[test]
    fn test_drop_zone_without_preview_shows_file_name() {
        let content = DropZoneContent::select(None, Some("broken.png".to_string()));
        assert_eq!(content, DropZoneContent::Unavailable("broken.png".to_string()));
    }

    #[test]
    fn test_drop_zone_prompt_when_nothing_selected() {
        assert_eq!(DropZoneContent::select(None, None), DropZoneContent::Prompt);
    }

    #[test]
    fn test_drop_zone_class() {
        assert_eq!(drop_zone_class(false), "drop-zone");
        assert_eq!(drop_zone_class(true), "drop-zone drag-active");
    }
}
