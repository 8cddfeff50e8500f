use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("シート取得エラー: タブ「{tab}」 HTTP {status}")]
    Http { tab: String, status: u16 },

    #[error("通信エラー: {0}")]
    Request(#[from] reqwest::Error),

    #[error("シートデータが不正: {0}")]
    Sheet(#[from] portfolio_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
