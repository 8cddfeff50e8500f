//! シートの取得元
//!
//! Google SheetsのCSVエクスポート（gviz）からタブ単位でテキストを取得する。

use crate::error::{PortfolioError, Result};
use async_trait::async_trait;
use portfolio_common::encode_component;
use std::sync::Arc;

/// タブ名からCSVテキストを返す取得元
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_csv(&self, tab: &str) -> Result<String>;
}

#[async_trait]
impl<T: SheetSource + ?Sized> SheetSource for Arc<T> {
    async fn fetch_csv(&self, tab: &str) -> Result<String> {
        (**self).fetch_csv(tab).await
    }
}

/// タブのCSVエクスポートURL
pub fn sheet_url(sheet_id: &str, tab: &str) -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv&sheet={}",
        sheet_id,
        encode_component(tab)
    )
}

/// HTTPでシートを取得する
///
/// タイムアウトはreqwestの既定値のまま。リトライはしない。
pub struct HttpSheetSource {
    client: reqwest::Client,
    sheet_id: String,
}

impl HttpSheetSource {
    pub fn new(sheet_id: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), sheet_id)
    }

    pub fn with_client(client: reqwest::Client, sheet_id: impl Into<String>) -> Self {
        Self {
            client,
            sheet_id: sheet_id.into(),
        }
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch_csv(&self, tab: &str) -> Result<String> {
        let url = sheet_url(&self.sheet_id, tab);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Http {
                tab: tab.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
