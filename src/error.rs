use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("プロジェクトが見つかりません: {0}")]
    ProjectNotFound(String),

    #[error("コンテンツファイルが見つかりません: {0}")]
    ContentNotFound(String),

    #[error("コンテンツが不正: {0}")]
    Content(#[from] portfolio_common::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
