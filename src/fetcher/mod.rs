//! シート取得モジュール
//!
//! タブ単位でCSVを取得し、ヘッダー付きレコードに変換してキャッシュする。
//!
//! ## 処理フロー
//! 1. キャッシュにあればそれを返す（通信しない）
//! 2. 取得元からCSVテキストを取得
//! 3. パースして `SheetResult` を作り、キャッシュに保存
//!
//! 同じタブへの同時取得はまとめない。両方が通信し、先に保存した結果が残る。

pub mod cache;
pub mod source;

pub use cache::SheetCache;
pub use source::{sheet_url, HttpSheetSource, SheetSource};

use crate::config::Config;
use crate::error::Result;
use portfolio_common::{normalize_sheet, SheetResult, Work};
use std::sync::Arc;

pub struct SheetFetcher<S> {
    source: S,
    cache: Arc<SheetCache>,
    works_tab: String,
    fallback_tab: String,
}

impl SheetFetcher<HttpSheetSource> {
    /// 設定からHTTP取得用のフェッチャーを作る
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpSheetSource::new(config.sheet_id()?);
        Ok(Self::new(source).with_tabs(&config.works_tab, &config.fallback_tab))
    }
}

impl<S: SheetSource> SheetFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Arc::new(SheetCache::new()),
            works_tab: "works".into(),
            fallback_tab: "projects".into(),
        }
    }

    /// 作品タブと代替タブの名前を変更
    pub fn with_tabs(mut self, works_tab: &str, fallback_tab: &str) -> Self {
        self.works_tab = works_tab.to_string();
        self.fallback_tab = fallback_tab.to_string();
        self
    }

    /// 外部で作ったキャッシュを共有する
    pub fn with_cache(mut self, cache: Arc<SheetCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &Arc<SheetCache> {
        &self.cache
    }

    /// タブを取得する（キャッシュ優先）
    pub async fn fetch_sheet(&self, tab: &str) -> Result<Arc<SheetResult>> {
        if let Some(cached) = self.cache.get(tab) {
            tracing::debug!(tab, "キャッシュヒット");
            return Ok(cached);
        }

        tracing::info!(tab, "シートを取得中");
        let text = self.source.fetch_csv(tab).await?;
        let sheet = SheetResult::from_csv(&text)?;
        tracing::info!(tab, records = sheet.records.len(), "シート取得完了");

        Ok(self.cache.insert(tab, sheet))
    }

    /// 作品タブを取得する
    ///
    /// 失敗したら代替タブを1回だけ試し、その結果（成功・失敗とも）を返す。
    pub async fn fetch_works(&self) -> Result<Arc<SheetResult>> {
        match self.fetch_sheet(&self.works_tab).await {
            Ok(sheet) => Ok(sheet),
            Err(e) => {
                tracing::warn!(
                    tab = %self.works_tab,
                    fallback = %self.fallback_tab,
                    error = %e,
                    "作品タブの取得に失敗、代替タブを試します"
                );
                self.fetch_sheet(&self.fallback_tab).await
            }
        }
    }

    /// 作品タブを取得して正規化する
    pub async fn fetch_normalized_works(&self) -> Result<Vec<Work>> {
        let sheet = self.fetch_works().await?;
        Ok(normalize_sheet(&sheet))
    }
}
