//! 対話式の問い合わせ作成
//!
//! フラグで渡されなかった項目だけを入力させ、検証してから mailto URI を返す。

use crate::error::{PortfolioError, Result};
use dialoguer::Input;
use portfolio_common::ContactMessage;

/// 未入力の項目を対話で補う
pub fn fill_interactively(
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
) -> Result<ContactMessage> {
    let name = match name {
        Some(v) => v,
        None => prompt("Your name")?,
    };
    let email = match email {
        Some(v) => v,
        None => prompt("Your email")?,
    };
    let message = match message {
        Some(v) => v,
        None => prompt("Message")?,
    };
    Ok(ContactMessage::new(name, email, message))
}

/// 検証して mailto URI を作る
pub fn compose(message: &ContactMessage, recipient: &str) -> Result<String> {
    message.validate()?;
    Ok(message.mailto_uri(recipient))
}

fn prompt(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| PortfolioError::Prompt(e.to_string()))
}
