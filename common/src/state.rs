//! UI状態と更新関数
//!
//! `(state, action) -> state` の一方向更新。描画層から独立してテストできる。

use crate::filter;
use crate::selection::Selection;
use crate::types::ProjectRecord;

/// ページ表示中のUI状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub query: String,
    pub selection: Selection,
}

/// ユーザー操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 検索欄の入力（キー入力ごと）
    SetQuery(String),
    /// 「View Details」
    Select(ProjectRecord),
    /// 閉じるボタン・背景クリック・Escape
    Dismiss,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 操作を適用した新しい状態を返す
    ///
    /// 検索語を変えても開いているモーダルは閉じない。
    pub fn update(self, action: Action) -> Self {
        match action {
            Action::SetQuery(query) => Self { query, ..self },
            Action::Select(record) => Self {
                selection: self.selection.select(record),
                ..self
            },
            Action::Dismiss => Self {
                selection: self.selection.dismiss(),
                ..self
            },
        }
    }

    /// 現在の検索語で絞り込んだレコード
    pub fn visible<'a>(&self, records: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        filter::filter(records, &self.query)
    }
}
