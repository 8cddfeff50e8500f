//! 作品データの型定義
//!
//! - RawRow: CSVの1行（ヘッダー順のフィールド）
//! - RawRecord: サニタイズ済みヘッダー名 → 値 のマップ
//! - SheetResult: 1タブ分の取得結果（ヘッダー + レコード）
//! - Work: 正規化後の作品レコード

use crate::csv::{find_col, parse_csv, sanitize_header};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CSVの1行
pub type RawRow = Vec<String>;

/// ヘッダー名でキー付けされた生レコード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, String>);

impl RawRecord {
    /// ヘッダー行とデータ行からレコードを作る
    ///
    /// 足りないセルは空文字、ヘッダーより多いセルは無視する。
    pub fn from_row<S: AsRef<str>>(headers: &[S], row: &[String]) -> Self {
        let mut fields = BTreeMap::new();
        for (i, header) in headers.iter().enumerate() {
            let value = row.get(i).cloned().unwrap_or_default();
            fields.insert(sanitize_header(header.as_ref()), value);
        }
        Self(fields)
    }

    /// キーの値（なければ空文字）
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    /// 候補キーを順に調べ、最初の空でない値を返す
    pub fn first_of(&self, keys: &[&str]) -> &str {
        keys.iter()
            .map(|key| self.get(key))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// 1タブ分の取得結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetResult {
    /// 元のヘッダー（サニタイズ前）
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl SheetResult {
    /// パース済みの行から組み立てる（0行目がヘッダー）
    ///
    /// ヘッダーとデータ行が揃っていない（2行未満）場合は `Error::NoData`。
    pub fn from_rows(mut rows: Vec<RawRow>) -> Result<Self> {
        if rows.len() < 2 {
            return Err(Error::NoData { rows: rows.len() });
        }

        let headers = rows.remove(0);
        let records = rows
            .iter()
            .map(|row| RawRecord::from_row(&headers, row))
            .collect();

        Ok(Self { headers, records })
    }

    /// CSVテキストから組み立てる
    pub fn from_csv(text: &str) -> Result<Self> {
        Self::from_rows(parse_csv(text))
    }

    /// 元のヘッダー名で列を探し、その列の値を返す
    pub fn column(&self, patterns: &[&str]) -> Option<Vec<&str>> {
        let idx = find_col(&self.headers, patterns)?;
        let key = sanitize_header(&self.headers[idx]);
        Some(self.records.iter().map(|r| r.get(&key)).collect())
    }
}

/// 正規化後の作品レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, rename = "type")]
    pub work_type: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub statement: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub collaborators: String,
    #[serde(default)]
    pub featured: bool,
    /// 999 は「順序なし（最後）」
    #[serde(default = "default_featured_order")]
    pub featured_order: i32,
    /// 解決済みサムネイルURL
    #[serde(default)]
    pub thumb: String,
    /// 解決済みヒーロー画像URL
    #[serde(default)]
    pub hero: String,
    #[serde(default)]
    pub gallery: String,
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub demo_url: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub tags: String,
}

pub const DEFAULT_FEATURED_ORDER: i32 = 999;
pub const DEFAULT_STATUS: &str = "published";

fn default_featured_order() -> i32 {
    DEFAULT_FEATURED_ORDER
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

impl Default for Work {
    fn default() -> Self {
        Self {
            slug: String::new(),
            title: String::new(),
            year: String::new(),
            work_type: String::new(),
            medium: String::new(),
            description: String::new(),
            statement: String::new(),
            venue: String::new(),
            city: String::new(),
            country: String::new(),
            collaborators: String::new(),
            featured: false,
            featured_order: DEFAULT_FEATURED_ORDER,
            thumb: String::new(),
            hero: String::new(),
            gallery: String::new(),
            video: String::new(),
            demo_url: String::new(),
            status: default_status(),
            tags: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_from_row_pads_missing_cells() {
        let headers = ["Title", "Year", "Venue"];
        let row = vec!["Kong".to_string()];
        let record = RawRecord::from_row(&headers, &row);

        assert_eq!(record.len(), 3);
        assert_eq!(record.get("title"), "Kong");
        assert_eq!(record.get("year"), "");
        assert_eq!(record.get("venue"), "");
    }

    #[test]
    fn test_raw_record_ignores_extra_cells() {
        let headers = ["Title"];
        let row = vec!["Kong".to_string(), "extra".to_string()];
        let record = RawRecord::from_row(&headers, &row);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_raw_record_duplicate_key_last_wins() {
        let headers = ["Image", "image"];
        let row = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        let record = RawRecord::from_row(&headers, &row);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("image"), "b.jpg");
    }

    #[test]
    fn test_first_of() {
        let record: RawRecord = [("name", "Fallback"), ("title", ""), ("project_name", "Project")]
            .into_iter()
            .collect();

        assert_eq!(record.first_of(&["title", "project_name", "name"]), "Project");
        assert_eq!(record.first_of(&["title", "missing"]), "");
        assert_eq!(record.first_of(&[]), "");
    }

    #[test]
    fn test_sheet_result_from_csv() {
        let sheet = SheetResult::from_csv("Title,Type of Work\nKong,Installation\nCeing,\n")
            .expect("パース失敗");

        assert_eq!(sheet.headers, vec!["Title", "Type of Work"]);
        assert_eq!(sheet.records.len(), 2);
        assert_eq!(sheet.records[0].get("type_of_work"), "Installation");
        assert_eq!(sheet.records[1].get("type_of_work"), "");
    }

    #[test]
    fn test_sheet_result_requires_data_row() {
        let err = SheetResult::from_csv("Title,Year\n").unwrap_err();
        assert!(matches!(err, Error::NoData { rows: 1 }));

        let err = SheetResult::from_csv("").unwrap_err();
        assert!(matches!(err, Error::NoData { rows: 0 }));
    }

    #[test]
    fn test_sheet_result_column() {
        let sheet = SheetResult::from_csv("Project Name,Year\nKong,2021\nKhwan,2019").unwrap();

        assert_eq!(sheet.column(&["title", "name"]), Some(vec!["Kong", "Khwan"]));
        assert_eq!(sheet.column(&["venue"]), None);
    }

    #[test]
    fn test_work_default() {
        let work = Work::default();
        assert_eq!(work.featured_order, 999);
        assert_eq!(work.status, "published");
        assert!(!work.featured);
    }

    #[test]
    fn test_work_serialize_keys() {
        let work = Work {
            slug: "kong".to_string(),
            work_type: "Installation".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&work).expect("シリアライズ失敗");
        assert!(json.contains("\"type\":\"Installation\""));
        assert!(json.contains("\"featured_order\":999"));
        assert!(json.contains("\"demo_url\":\"\""));
    }

    #[test]
    fn test_work_deserialize_missing_fields() {
        let json = r#"{"slug": "kong", "title": "Kong"}"#;
        let work: Work = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(work.featured_order, 999);
        assert_eq!(work.status, "published");
    }
}
