//! NeuralDetect native client
//!
//! 共通ライブラリのセッションをreqwestで動かすためのトランスポート・設定・CLI

pub mod cli;
pub mod config;
pub mod error;
pub mod image_file;
pub mod transport;

pub use config::Config;
pub use error::{NeuralDetectError, Result};
pub use image_file::ImageFile;
pub use transport::HttpTransport;

/// tracingの初期化
///
/// `RUST_LOG` があればそれを優先する。共通ライブラリの `log` 出力もここに流れる
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    // 既に購読者がいる場合（テストや二重呼び出し）はそちらに任せる
    if let Err(err) = installed {
        tracing::debug!("tracing already initialized: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(false);
        init_tracing(true);
        tracing::debug!("still logging");
    }
}
