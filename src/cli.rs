use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "minesweeper")]
#[command(about = "美食地標防雷系統 - 查詢地點的踩雷分數與分析報告", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 地点を検索して候補を表示
    Search {
        /// 地点名
        #[arg(required = true)]
        query: String,

        /// 応答JSONをそのまま出力
        #[arg(long)]
        json: bool,
    },

    /// place_id を指定して分析
    Analyze {
        /// 検索結果の place_id
        #[arg(required = true)]
        place_id: String,

        /// 応答JSONをそのまま出力
        #[arg(long)]
        json: bool,
    },

    /// 検索 → 候補選択 → 分析 を対話的に実行
    Run {
        /// 地点名（省略時は入力を求める）
        query: Option<String>,
    },

    /// 設定管理
    Config {
        /// バックエンドURLを保存
        #[arg(long)]
        set_base_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
