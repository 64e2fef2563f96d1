//! コンテンツ読み込み
//!
//! パス未指定なら組み込みコンテンツ、指定があればJSONを読み込んで検証する。

use crate::error::{PortfolioError, Result};
use portfolio_common::{Portfolio, ProjectRecord};
use std::path::Path;
use tracing::{debug, info, warn};

pub fn load_portfolio(path: Option<&Path>) -> Result<Portfolio> {
    let Some(path) = path else {
        debug!("using built-in content");
        return Ok(Portfolio::builtin());
    };

    if !path.exists() {
        return Err(PortfolioError::ContentNotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path)?;
    let portfolio = Portfolio::from_json(&json)?;
    info!(
        path = %path.display(),
        projects = portfolio.projects.len(),
        skills = portfolio.skills.len(),
        "loaded custom content"
    );
    Ok(portfolio)
}

/// タイトル完全一致でプロジェクトを取得
pub fn find_project(portfolio: &Portfolio, title: &str) -> Result<ProjectRecord> {
    portfolio
        .project(title)
        .cloned()
        .ok_or_else(|| PortfolioError::ProjectNotFound(title.to_string()))
}

/// 問い合わせの既定宛先（コンテンツのプロフィールのメール）
///
/// 読み込みに失敗した場合は警告を出してエラーを返す。
pub fn profile_email(path: Option<&Path>) -> Result<String> {
    load_portfolio(path)
        .map(|p| p.profile.email)
        .inspect_err(|e| warn!(error = %e, "content unavailable, no profile email"))
}
