//! /predict 呼び出し（fetch + FormData）

use neural_detect_common::{AnalyzeError, PredictionTransport, RawResponse, DEFAULT_ENDPOINT, FILE_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use crate::browser_file::BrowserFile;

/// ビルド時に `NEURAL_DETECT_ENDPOINT` で上書きできる
pub const ENDPOINT: &str = match option_env!("NEURAL_DETECT_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => DEFAULT_ENDPOINT,
};

#[derive(Debug, Clone)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new(ENDPOINT)
    }
}

impl PredictionTransport<BrowserFile> for FetchTransport {
    async fn send(&self, file: &BrowserFile) -> Result<RawResponse, AnalyzeError> {
        post_form(&self.endpoint, file)
            .await
            .map_err(|err| AnalyzeError::transport(js_error_message(&err)))
    }
}

/// multipartでPOSTしてステータスとボディを返す
async fn post_form(endpoint: &str, file: &BrowserFile) -> Result<RawResponse, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, file.as_file(), &file.as_file().name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;

    Ok(RawResponse {
        status: resp.status(),
        body: body.as_string().unwrap_or_default(),
    })
}

/// JsValueからエラーメッセージを取り出す（取れなければ空文字）
fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_default()
}
