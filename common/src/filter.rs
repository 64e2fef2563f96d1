//! プロジェクト検索フィルタ
//!
//! タイトルまたは技術スタックに検索語が含まれるレコードを元の順序で返す。
//! 大文字小文字は区別しない。前後の空白は除去しない。

use crate::types::ProjectRecord;
use tracing::debug;

/// 1件が検索語にマッチするか
pub fn matches(record: &ProjectRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    contains_lowercase(record, &needle)
}

fn contains_lowercase(record: &ProjectRecord, needle: &str) -> bool {
    record.title().to_lowercase().contains(needle)
        || record.stack().to_lowercase().contains(needle)
}

/// 検索語でレコードを絞り込む
///
/// 空の検索語はすべてにマッチする。マッチなしは空のVec。
pub fn filter<'a>(records: &'a [ProjectRecord], query: &str) -> Vec<&'a ProjectRecord> {
    let needle = query.to_lowercase();
    let hits: Vec<&ProjectRecord> = records
        .iter()
        .filter(|r| contains_lowercase(r, &needle))
        .collect();
    debug!(query, total = records.len(), hits = hits.len(), "filter projects");
    hits
}

/// `filter` の所有版（リアクティブUI向け）
pub fn filter_owned(records: &[ProjectRecord], query: &str) -> Vec<ProjectRecord> {
    filter(records, query).into_iter().cloned().collect()
}
