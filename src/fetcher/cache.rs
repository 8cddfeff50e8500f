//! シート取得結果のキャッシュ
//!
//! タブ名をキーに取得結果を保持する。プロセス（セッション）の間だけ有効で、
//! ファイルには保存しない。

use parking_lot::Mutex;
use portfolio_common::SheetResult;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct SheetCache {
    /// タブ名 → 取得結果
    entries: Mutex<HashMap<String, Arc<SheetResult>>>,
}

impl SheetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// キャッシュをルックアップ
    pub fn get(&self, tab: &str) -> Option<Arc<SheetResult>> {
        self.entries.lock().get(tab).cloned()
    }

    /// キャッシュに追加
    ///
    /// 同じタブが既に入っていれば既存の結果を残し、それを返す。
    pub fn insert(&self, tab: &str, result: SheetResult) -> Arc<SheetResult> {
        self.entries
            .lock()
            .entry(tab.to_string())
            .or_insert_with(|| Arc::new(result))
            .clone()
    }

    /// キャッシュ件数
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(title: &str) -> SheetResult {
        SheetResult::from_csv(&format!("Title\n{}", title)).unwrap()
    }

    #[test]
    fn test_cache_empty() {
        let cache = SheetCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("works").is_none());
    }

    #[test]
    fn test_cache_hit_returns_same_object() {
        let cache = SheetCache::new();
        let stored = cache.insert("works", sheet("Kong"));

        let first = cache.get("works").expect("キャッシュが見つからない");
        let second = cache.get("works").expect("キャッシュが見つからない");
        assert!(Arc::ptr_eq(&stored, &first));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_keeps_first_insert() {
        let cache = SheetCache::new();
        let first = cache.insert("works", sheet("Kong"));
        let second = cache.insert("works", sheet("Khwan"));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.records[0].get("title"), "Kong");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_clear() {
        let cache = SheetCache::new();
        cache.insert("works", sheet("Kong"));
        cache.insert("projects", sheet("Ceing"));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
