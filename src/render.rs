//! 端末向けテキスト出力
//!
//! Webページの各セクションに相当する内容を文字列で組み立てる。

use portfolio_common::{Profile, ProjectRecord, SkillGroup};

/// 行ごとに改行を付けて連結
fn join_lines(lines: Vec<String>) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// プロジェクト一覧（検索結果）
pub fn project_list(records: &[&ProjectRecord], query: &str) -> String {
    if records.is_empty() {
        return format!("No projects match \"{}\"\n", query);
    }

    let width = records.iter().map(|r| r.title().chars().count()).max().unwrap_or(0);
    let lines = records
        .iter()
        .map(|record| {
            let pad = width - record.title().chars().count();
            format!("{}{}  {}", record.title(), " ".repeat(pad), record.stack())
        })
        .collect();
    join_lines(lines)
}

/// プロジェクト詳細（モーダル相当）
///
/// プレースホルダのリンクは「-」で表示。
pub fn project_details(record: &ProjectRecord) -> String {
    let mut lines = vec![
        record.title().to_string(),
        "=".repeat(record.title().chars().count()),
        format!("Stack: {}", record.stack()),
    ];
    if !record.description().is_empty() {
        lines.push(String::new());
        lines.push(record.description().to_string());
    }
    lines.push(String::new());

    let code = if record.has_repository_link() { record.repository_link() } else { "-" };
    let live = if record.has_live_link() { record.live_link() } else { "-" };
    lines.push(format!("Code:  {}", code));
    lines.push(format!("Live:  {}", live));
    if !record.image().is_empty() {
        lines.push(format!("Image: {}", record.image()));
    }
    join_lines(lines)
}

/// スキル一覧
pub fn skills(groups: &[SkillGroup]) -> String {
    let lines = groups
        .iter()
        .map(|g| format!("{}: {}", g.group, g.items.join(", ")))
        .collect();
    join_lines(lines)
}

/// プロフィール + フッター
pub fn about(profile: &Profile, year: i32) -> String {
    let mut lines = vec![format!("Hi, I'm {}", profile.name)];
    if !profile.headline.is_empty() {
        lines.push(profile.headline.clone());
    }
    if !profile.bio.is_empty() {
        lines.push(String::new());
        lines.push(profile.bio.clone());
    }
    if !profile.tagline.is_empty() {
        lines.push(profile.tagline.clone());
    }
    lines.push(String::new());
    if !profile.github_url.is_empty() {
        lines.push(format!("GitHub: {}", profile.github_url));
    }
    if !profile.email.is_empty() {
        lines.push(format!("Email:  {}", profile.email));
    }
    if !profile.highlights.is_empty() {
        lines.push(format!("Focus:  {}", profile.highlights.join(" / ")));
    }
    lines.push(String::new());
    lines.push(footer(&profile.name, year));
    join_lines(lines)
}

pub fn footer(name: &str, year: i32) -> String {
    format!("© {} {}", year, name)
}
