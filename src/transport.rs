//! reqwestによる /predict 送信

use crate::config::Config;
use crate::error::{NeuralDetectError, Result};
use crate::image_file::ImageFile;
use neural_detect_common::{AnalyzeError, PredictionTransport, RawResponse, FILE_FIELD};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// タイムアウトなしのクライアントで作成
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// 設定から作成
    ///
    /// `endpoint_override` はコマンドライン引数からの上書き
    pub fn from_config(config: &Config, endpoint_override: Option<&str>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let client = builder
            .build()
            .map_err(|e| NeuralDetectError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(endpoint_override),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(file: &ImageFile) -> std::result::Result<Form, AnalyzeError> {
        use neural_detect_common::ImageSource;

        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.file_name())
            .mime_str(&file.media_type())
            .map_err(|e| AnalyzeError::transport(e.to_string()))?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

impl PredictionTransport<ImageFile> for HttpTransport {
    async fn send(&self, file: &ImageFile) -> std::result::Result<RawResponse, AnalyzeError> {
        let form = Self::build_form(file)?;
        tracing::debug!(endpoint = %self.endpoint, bytes = file.bytes().len(), "POST");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalyzeError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AnalyzeError::transport(e.to_string()))?;
        tracing::debug!(status, "response received");

        Ok(RawResponse { status, body })
    }
}
