//! 作品レコードの正規化
//!
//! シートの列名は版によって揺れがある（`title` / `project_name` / `name` など）。
//! 生レコードを固定スキーマの `Work` に写像し、欠損値は既定値で埋める。
//! 失敗することはない。
//!
//! ## 処理フロー
//! 1. 候補キーの最初の空でない値を採用（`RawRecord::first_of`）
//! 2. スラッグ・注目フラグ・表示順の変換
//! 3. 画像参照を表示用URLに解決

pub mod known;

pub use known::{known_work_slug, KnownWork, KNOWN_WORKS};

use crate::image::{drive_to_image, resolve_image};
use crate::text::{encode_component, is_truthy, to_slug};
use crate::types::{RawRecord, SheetResult, Work, DEFAULT_FEATURED_ORDER, DEFAULT_STATUS};

const TITLE_KEYS: &[&str] = &["title", "project_name", "name"];
const TYPE_KEYS: &[&str] = &["type", "type_of_work"];
const MEDIUM_KEYS: &[&str] = &["medium", "tech"];
const VENUE_KEYS: &[&str] = &["venue", "platform_event_venue", "platform", "event"];
const FEATURED_KEYS: &[&str] = &["featured", "highlight"];
/// 旧シートのサムネイル列（URLとして扱う）
const LEGACY_THUMB_KEYS: &[&str] = &["image_url", "image", "thumbnail"];

/// 詳細ページのパス
const DETAIL_PAGE: &str = "work.html";

/// 生レコードを正規化する
pub fn normalize_work(record: &RawRecord) -> Work {
    let title = record.first_of(TITLE_KEYS).to_string();
    let slug = match record.get("slug") {
        "" => to_slug(&title),
        explicit => explicit.to_string(),
    };

    let mut thumb = resolve_image(&slug, record.get("thumb"));
    if thumb.is_empty() {
        thumb = drive_to_image(record.first_of(LEGACY_THUMB_KEYS));
    }
    let hero = resolve_image(&slug, record.get("hero"));

    let status = match record.get("status") {
        "" => DEFAULT_STATUS.to_string(),
        status => status.to_string(),
    };

    Work {
        year: record.get("year").to_string(),
        work_type: record.first_of(TYPE_KEYS).to_string(),
        medium: record.first_of(MEDIUM_KEYS).to_string(),
        description: record.get("description").to_string(),
        statement: record.get("statement").to_string(),
        venue: record.first_of(VENUE_KEYS).to_string(),
        city: record.get("city").to_string(),
        country: record.get("country").to_string(),
        collaborators: record.get("collaborators").to_string(),
        featured: is_truthy(record.first_of(FEATURED_KEYS)),
        featured_order: parse_order(record.get("featured_order")),
        thumb,
        hero,
        gallery: record.get("gallery").to_string(),
        video: record.get("video").to_string(),
        demo_url: record.get("demo_url").to_string(),
        status,
        tags: record.get("tags").to_string(),
        slug,
        title,
    }
}

/// シート全体を正規化する（行の順序は保つ）
pub fn normalize_sheet(sheet: &SheetResult) -> Vec<Work> {
    sheet.records.iter().map(normalize_work).collect()
}

/// 表示順の解釈
///
/// 先頭の整数部分（符号つき）を読み、読めなければ 999。
/// `"3rd"` は 3、`"2.5"` は 2 になる。
fn parse_order(value: &str) -> i32 {
    let value = value.trim();
    let digits_start = usize::from(value.starts_with(['-', '+']));
    let digits_len = value[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len() - digits_start);

    if digits_len == 0 {
        return DEFAULT_FEATURED_ORDER;
    }

    value[..digits_start + digits_len]
        .parse()
        .unwrap_or(DEFAULT_FEATURED_ORDER)
}

/// 詳細ページを持つ作品か判定
///
/// 説明文があるか、既知の作品テーブルに一致するタイトルなら真。
pub fn has_detail_page(work: &Work) -> bool {
    !work.description.is_empty() || known_work_slug(&work.title).is_some()
}

/// 詳細ページのURL
pub fn work_url(work: &Work) -> String {
    format!("{}?slug={}", DETAIL_PAGE, encode_component(&work.slug))
}

/// 種別の主カテゴリ（最初の `/` より前）
pub fn primary_category(work_type: &str) -> &str {
    work_type.split('/').next().unwrap_or("").trim()
}
