//! メインアプリケーションコンポーネント
//!
//! 画面の状態はすべてここの `Session` が持ち、子には値とコールバックだけ渡す

use leptos::prelude::*;
use leptos::task::spawn_local;
use neural_detect_common::{ImageSource, PredictionTransport, Session};
use web_sys::File;

use crate::api::FetchTransport;
use crate::browser_file::BrowserFile;
use crate::components::{header::Header, image_uploader::ImageUploader};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // Fileはスレッド間で共有できないのでローカルシグナルに置く。
    // シグナル破棄時にSessionごとObject URLも解放される
    let session = RwSignal::new_local(Session::<BrowserFile>::new());
    let transport = FetchTransport::default();

    let preview_url = Signal::derive(move || {
        session.with(|s| s.preview().map(|url| url.as_str().to_string()))
    });
    let file_name = Signal::derive(move || {
        session.with(|s| s.selected_file().map(|file| file.file_name()))
    });
    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let prediction = Signal::derive(move || session.with(|s| s.prediction().cloned()));
    let error = Signal::derive(move || session.with(|s| s.error_message()));

    // 画像選択ハンドラ
    let on_file_select = move |file: File| {
        session.update(|s| {
            s.select_file(BrowserFile::new(file));
        });
    };

    // 解析開始ハンドラ
    let on_analyze = move |_: ()| {
        let mut pending = None;
        session.update(|s| pending = s.begin_analysis().cloned());
        let Some(file) = pending else {
            return;
        };

        let transport = transport.clone();
        spawn_local(async move {
            let response = transport.send(&file).await;
            // 画面が破棄されていれば結果は捨てる
            session.try_update(|s| s.complete_analysis(response));
        });
    };

    // リセットハンドラ
    let on_reset = move |_: ()| {
        session.update(|s| s.reset());
    };

    view! {
        <div class="container">
            <Header />

            <main class="main">
                <ImageUploader
                    on_file_select=on_file_select
                    preview_url=preview_url
                    file_name=file_name
                    on_analyze=on_analyze
                    on_reset=on_reset
                    is_loading=is_loading
                    prediction=prediction
                    error=error
                />
            </main>
        </div>
    }
}
