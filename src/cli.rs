use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "neural-detect")]
#[command(about = "AI-Powered Postal Package Damage Detection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 画像を /predict に送信して判定を表示
    Analyze {
        /// 画像ファイルのパス（PNG/JPEG）
        #[arg(required = true)]
        image: PathBuf,

        /// 推論エンドポイント（設定ファイル・環境変数より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 推論エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定（0でタイムアウトなし）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `--json` 指定時の失敗出力
pub fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
