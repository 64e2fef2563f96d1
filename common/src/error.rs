//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid project record: {0}")]
    InvalidRecord(String),

    #[error("Duplicate project title: {0}")]
    DuplicateTitle(String),

    #[error("Skill group #{0} has an empty label")]
    EmptySkillGroup(usize),

    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_duplicate_title() {
        let error = Error::DuplicateTitle("Event Booking System".to_string());
        assert_eq!(
            format!("{}", error),
            "Duplicate project title: Event Booking System"
        );
    }

    #[test]
    fn test_error_display_missing_field() {
        let error = Error::MissingField("email");
        assert_eq!(format!("{}", error), "Required field is empty: email");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidEmail("nobody".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidEmail"));
        assert!(debug.contains("nobody"));
    }
}
