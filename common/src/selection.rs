//! 選択状態（詳細モーダル）の状態機械
//!
//! - `Closed`: 未選択、モーダル非表示
//! - `Open(record)`: 1件選択中、モーダル表示
//!
//! 開いたまま別のレコードを選ぶと直接切り替わる。

use crate::types::ProjectRecord;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(ProjectRecord),
}

impl Selection {
    /// レコードを選択する（どの状態からでも `Open(record)`）
    pub fn select(self, record: ProjectRecord) -> Self {
        debug!(title = record.title(), "open project details");
        Selection::Open(record)
    }

    /// 閉じる（何度呼んでも `Closed`）
    pub fn dismiss(self) -> Self {
        if let Selection::Open(record) = &self {
            debug!(title = record.title(), "dismiss project details");
        }
        Selection::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn selected(&self) -> Option<&ProjectRecord> {
        match self {
            Selection::Open(record) => Some(record),
            Selection::Closed => None,
        }
    }
}
