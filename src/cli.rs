use clap::{Parser, Subcommand};
use gherkin_review_common::RejectionReason;

#[derive(Parser)]
#[command(name = "gherkin-review")]
#[command(about = "Review generated Gherkin test cases from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイルより優先）
    #[arg(long, global = true, env = "GHERKIN_REVIEW_API_URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// スクリーンショット一覧（ダッシュボード）
    List,

    /// 1件の詳細とGherkinを表示
    Show {
        /// スクリーンショットID
        id: String,
    },

    /// テストケースを承認
    Accept {
        /// スクリーンショットID
        id: String,
    },

    /// テストケースを却下（理由を省略すると対話的に選択）
    Reject {
        /// スクリーンショットID
        id: String,

        /// 却下理由 (gesture / missing-error-state / over-creation / translation / condition-logic / ui-element)
        #[arg(short, long)]
        reason: Option<RejectionReason>,

        /// 任意のコメント
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// 承認済みテストケースを .feature に出力
    Export,

    /// フィードバック履歴
    Feedback,

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを保存
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
