//! エラーケーステスト

use portfolio_sheet::error::PortfolioError;

/// PortfolioErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PortfolioError::Config("シートIDが設定されていません".to_string()),
        PortfolioError::Http {
            tab: "works".to_string(),
            status: 404,
        },
        PortfolioError::Sheet(portfolio_common::Error::NoData { rows: 1 }),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_http_error_message() {
    let err = PortfolioError::Http {
        tab: "projects".to_string(),
        status: 500,
    };
    let display = format!("{}", err);
    assert!(display.contains("projects"));
    assert!(display.contains("500"));
}

#[test]
fn test_error_from_common() {
    let err: PortfolioError = portfolio_common::Error::NoData { rows: 0 }.into();
    assert!(matches!(err, PortfolioError::Sheet(_)));
}

#[test]
fn test_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PortfolioError = io_error.into();
    assert!(matches!(err, PortfolioError::Io(_)));
}
