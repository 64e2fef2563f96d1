//! エラーケーステスト

use portfolio::error::PortfolioError;

/// PortfolioErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PortfolioError::Config("テスト設定エラー".to_string()),
        PortfolioError::ProjectNotFound("Unknown".to_string()),
        PortfolioError::ContentNotFound("/path/to/content.json".to_string()),
        PortfolioError::Prompt("入力中断".to_string()),
        PortfolioError::Content(portfolio_common::Error::MissingField("name")),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 共通エラーからの変換
#[test]
fn test_error_from_common() {
    let err: PortfolioError = portfolio_common::Error::DuplicateTitle("A".into()).into();
    assert!(matches!(err, PortfolioError::Content(_)));
    assert!(format!("{}", err).contains("Duplicate project title: A"));
}

/// IOエラーからの変換
#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
    let err: PortfolioError = io_err.into();
    assert!(matches!(err, PortfolioError::Io(_)));
}

/// 存在しないプロジェクトのメッセージ
#[test]
fn test_project_not_found_message() {
    let err = PortfolioError::ProjectNotFound("Missing App".into());
    assert_eq!(format!("{}", err), "プロジェクトが見つかりません: Missing App");
}
