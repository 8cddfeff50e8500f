//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// ヘッダー行とデータ行が揃っていない
    #[error("No data: expected a header row and at least one data row, got {rows} row(s)")]
    NoData { rows: usize },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_data() {
        let error = Error::NoData { rows: 1 };
        assert_eq!(
            format!("{}", error),
            "No data: expected a header row and at least one data row, got 1 row(s)"
        );
    }

    #[test]
    fn test_error_debug() {
        let debug = format!("{:?}", Error::NoData { rows: 0 });
        assert!(debug.contains("NoData"));
    }
}
