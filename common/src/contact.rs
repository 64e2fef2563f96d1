//! 問い合わせフォームから mailto URI を組み立てる
//!
//! 送信は既定のメーラーに任せる。配信結果は関知しない。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// フォーム入力値
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// 件名テンプレート
    pub fn subject(&self) -> String {
        format!("Portfolio message from {}", self.name)
    }

    /// 本文テンプレート
    pub fn body(&self) -> String {
        format!("Email: {}\n\nMessage:\n{}", self.email, self.message)
    }

    /// 必須項目とメール形式の検証
    ///
    /// ブラウザの `required` / `type="email"` と同等の最低限のチェック。
    /// 名前・メッセージは空白のみでも受け付ける（`required` と同じ）。
    /// メールは `type="email"` と同様に前後の空白を除いて判定する。
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(Error::MissingField("email"));
        }
        if self.message.is_empty() {
            return Err(Error::MissingField("message"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(Error::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// `mailto:` URI（件名・本文はパーセントエンコード）
    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body()),
        )
    }
}

/// `local@domain` の形か（空白なし、@が1つ、両側が空でない）
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
