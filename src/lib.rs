//! Portfolio CLI
//!
//! Webページと同じコンテンツ・検索・詳細表示を端末から使う。

pub mod cli;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod logging;
pub mod render;
