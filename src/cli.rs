use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオ閲覧ツール（プロジェクト・スキル・問い合わせ）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// コンテンツJSON（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// プロジェクト一覧（検索語で絞り込み）
    Projects {
        /// 検索語（タイトル・技術スタックの部分一致、大文字小文字無視）
        #[arg(default_value = "")]
        query: String,
    },

    /// プロジェクトの詳細を表示
    Show {
        /// プロジェクトタイトル（完全一致）
        #[arg(required = true)]
        title: String,
    },

    /// スキル一覧
    Skills,

    /// プロフィール
    About,

    /// 問い合わせ用の mailto URI を作成
    Contact {
        /// 名前（省略時は対話入力）
        #[arg(long)]
        name: Option<String>,

        /// メールアドレス（省略時は対話入力）
        #[arg(long)]
        email: Option<String>,

        /// メッセージ（省略時は対話入力）
        #[arg(short, long)]
        message: Option<String>,
    },

    /// コンテンツJSONを検証
    Check {
        /// 検証するJSONファイル
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 現在のコンテンツをJSONで出力
    Dump {
        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// カスタムコンテンツJSONを設定
        #[arg(long)]
        set_content: Option<PathBuf>,

        /// カスタムコンテンツ設定を解除
        #[arg(long)]
        clear_content: bool,

        /// 問い合わせの宛先を設定
        #[arg(long)]
        set_contact_email: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
