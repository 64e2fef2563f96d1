use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// コンテンツパスを上書きする環境変数
pub const CONTENT_ENV: &str = "PORTFOLIO_CONTENT";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// カスタムコンテンツJSON（未設定なら組み込みコンテンツ）
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// 問い合わせの宛先（未設定ならプロフィールのメール）
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio").join("config.json"))
    }

    /// 使用するコンテンツパスを決定
    ///
    /// 優先順位: `--content` > 環境変数 > 設定ファイル
    pub fn resolve_content_path(
        &self,
        flag: Option<&Path>,
        env_value: Option<&str>,
    ) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| {
                env_value
                    .filter(|v| !v.trim().is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.content_path.clone())
    }

    /// mailto の宛先
    pub fn recipient<'a>(&'a self, profile_email: &'a str) -> &'a str {
        self.contact_email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(profile_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_precedence() {
        let config = Config {
            content_path: Some(PathBuf::from("/from/config.json")),
            contact_email: None,
        };

        let flag = PathBuf::from("/from/flag.json");
        assert_eq!(
            config.resolve_content_path(Some(&flag), Some("/from/env.json")),
            Some(flag.clone())
        );
        assert_eq!(
            config.resolve_content_path(None, Some("/from/env.json")),
            Some(PathBuf::from("/from/env.json"))
        );
        assert_eq!(
            config.resolve_content_path(None, None),
            Some(PathBuf::from("/from/config.json"))
        );
    }

    #[test]
    fn test_resolve_ignores_blank_env() {
        let config = Config::default();
        assert_eq!(config.resolve_content_path(None, Some("  ")), None);
    }

    #[test]
    fn test_recipient_override() {
        let mut config = Config::default();
        assert_eq!(config.recipient("me@example.com"), "me@example.com");

        config.contact_email = Some("jobs@example.com".into());
        assert_eq!(config.recipient("me@example.com"), "jobs@example.com");
    }
}
