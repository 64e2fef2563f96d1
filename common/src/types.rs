//! ポートフォリオのデータ型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ProjectRecord: プロジェクト1件の表示データ（構築時に検証）
//! - SkillGroup: スキルのグループ
//! - Profile: 自己紹介・連絡先
//! - Portfolio: ページ全体のコンテンツ

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// プロジェクト1件
///
/// フィールドは構築後に変更できない。`ProjectRecord::new` またはJSONからの
/// デシリアライズでのみ作られ、どちらもタイトルの検証を通る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawProjectRecord")]
pub struct ProjectRecord {
    title: String,
    stack: String,
    description: String,
    image: String,
    repository_link: String,
    live_link: String,
}

/// デシリアライズ用の未検証レコード
///
/// 元ページのフィールド名 `github` / `live` も受け付ける。
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProjectRecord {
    title: String,
    #[serde(default)]
    stack: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    #[serde(default, alias = "github")]
    repository_link: String,
    #[serde(default, alias = "live")]
    live_link: String,
}

impl TryFrom<RawProjectRecord> for ProjectRecord {
    type Error = Error;

    fn try_from(raw: RawProjectRecord) -> Result<Self> {
        Ok(ProjectRecord::new(raw.title, raw.stack)?
            .with_description(raw.description)
            .with_image(raw.image)
            .with_links(raw.repository_link, raw.live_link))
    }
}

impl ProjectRecord {
    /// タイトルと技術スタックからレコードを作る
    ///
    /// リンクは未設定時 `"#"`（元ページのプレースホルダ）になる。
    pub fn new(title: impl Into<String>, stack: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(Error::InvalidRecord("title must not be empty".into()));
        }
        Ok(Self {
            title,
            stack: stack.into(),
            description: String::new(),
            image: String::new(),
            repository_link: "#".into(),
            live_link: "#".into(),
        })
    }

    /// 組み込みコンテンツ用（タイトルは定数なので検証しない）
    pub(crate) fn builtin(title: &str, stack: &str, description: &str, image: &str) -> Self {
        Self {
            title: title.into(),
            stack: stack.into(),
            description: description.into(),
            image: image.into(),
            repository_link: "#".into(),
            live_link: "#".into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// リポジトリURLと公開URLを設定（空文字はプレースホルダ扱い）
    pub fn with_links(mut self, repository: impl Into<String>, live: impl Into<String>) -> Self {
        self.repository_link = placeholder_if_empty(repository.into());
        self.live_link = placeholder_if_empty(live.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn repository_link(&self) -> &str {
        &self.repository_link
    }

    pub fn live_link(&self) -> &str {
        &self.live_link
    }

    /// リポジトリURLが設定済みか（プレースホルダ `#` でない）
    pub fn has_repository_link(&self) -> bool {
        self.repository_link != "#"
    }

    /// 公開URLが設定済みか（プレースホルダ `#` でない）
    pub fn has_live_link(&self) -> bool {
        self.live_link != "#"
    }
}

fn placeholder_if_empty(link: String) -> String {
    if link.trim().is_empty() {
        "#".into()
    } else {
        link
    }
}

/// スキルグループ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub group: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl SkillGroup {
    pub fn new<I, S>(group: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group: group.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// 自己紹介・連絡先
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub headline: String,       // 肩書き
    pub bio: String,            // 自己紹介文
    pub tagline: String,        // ポートレート下の技術スタック
    pub portrait: String,       // ポートレート画像パス
    pub github_url: String,
    pub email: String,
    pub availability: String,   // 連絡先セクションの案内文
    pub highlights: Vec<String>, // 得意分野
}

/// ページ全体のコンテンツ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

impl Portfolio {
    /// JSONから読み込み、検証する
    pub fn from_json(json: &str) -> Result<Self> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// タイトルの一意性とスキルグループ名を検証
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.title()) {
                return Err(Error::DuplicateTitle(project.title().to_string()));
            }
        }
        if let Some(index) = self.skills.iter().position(|s| s.group.trim().is_empty()) {
            return Err(Error::EmptySkillGroup(index));
        }
        Ok(())
    }

    /// タイトル完全一致で検索
    pub fn project(&self, title: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.title() == title)
    }
}
