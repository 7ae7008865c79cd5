use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use neural_detect::{cli, config, error, init_tracing, HttpTransport, ImageFile};
use neural_detect_common::{Activity, Session};
use cli::{error_json, Cli, Commands};
use config::Config;
use error::{NeuralDetectError, Result};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("✘ {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze { image, endpoint, json } => {
            let config = Config::load()?;
            let transport = HttpTransport::from_config(&config, endpoint.as_deref())?;
            let file = ImageFile::open(&image)?;

            let mut session = Session::new();
            if !session.select_file(file) {
                // 画像以外は黙って無視する（続く解析で未選択エラーになる）
                tracing::debug!(path = %image.display(), "not an image, ignored");
            }

            if !json {
                println!("📦 neural-detect - Package Damage Detection\n");
                println!("- 送信先: {}", transport.endpoint());
            }

            let spinner = if json { ProgressBar::hidden() } else { ProgressBar::new_spinner() };
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Analyzing your package...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let activity = session.analyze(&transport).await.clone();
            spinner.finish_and_clear();

            match activity {
                Activity::Succeeded(prediction) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&prediction)?);
                    } else {
                        println!("✔ Analysis Complete\n");
                        println!("  {}", prediction.display_label());
                        println!("  Confidence: {}", prediction.confidence);
                    }
                }
                Activity::Failed(err) => {
                    if json {
                        println!("{}", error_json(&err.to_string()));
                    }
                    return Err(NeuralDetectError::Analyze(err));
                }
                other => {
                    tracing::warn!(?other, "analysis did not finish");
                }
            }
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            // 壊れた設定ファイルもここから上書きできるようにする
            let mut config = Config::load_or_default();

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.timeout_seconds = seconds;
                config.save()?;
                println!("✔ タイムアウトを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  エンドポイント: {}", config.endpoint(None));
                println!(
                    "  タイムアウト: {}",
                    if config.timeout_seconds == 0 {
                        "なし".to_string()
                    } else {
                        format!("{}秒", config.timeout_seconds)
                    }
                );
            }
        }
    }

    Ok(())
}
