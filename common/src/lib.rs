//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有される型と表示ロジック

pub mod types;
pub mod content;
pub mod error;
pub mod filter;
pub mod selection;
pub mod state;
pub mod contact;

pub use types::{Portfolio, Profile, ProjectRecord, SkillGroup};
pub use error::{Error, Result};
pub use filter::{filter, filter_owned, matches};
pub use selection::Selection;
pub use state::{Action, UiState};
pub use contact::ContactMessage;
