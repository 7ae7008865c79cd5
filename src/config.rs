use crate::error::{NeuralDetectError, Result};
use neural_detect_common::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "NEURAL_DETECT_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    /// リクエストのタイムアウト秒数（0はタイムアウトなし）
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: 0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 壊れた設定ファイルでも起動できるよう既定値に戻す
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(err) => {
                tracing::warn!("config path unavailable, using defaults: {err}");
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), "config load failed, using defaults: {err}");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| NeuralDetectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("neural-detect").join("config.json"))
    }

    /// 使用するエンドポイント
    ///
    /// 優先順位: コマンドライン引数 > 環境変数 > 設定ファイル
    pub fn endpoint(&self, flag: Option<&str>) -> String {
        let env = std::env::var(ENDPOINT_ENV).ok();
        self.endpoint_with(flag, env.as_deref())
    }

    pub fn endpoint_with(&self, flag: Option<&str>, env: Option<&str>) -> String {
        [flag, env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(self.endpoint.as_str())
            .to_string()
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(NeuralDetectError::Config(format!(
                "エンドポイントはhttp://またはhttps://で始めてください: {}",
                endpoint
            )));
        }
        self.endpoint = endpoint;
        self.save()
    }
}
