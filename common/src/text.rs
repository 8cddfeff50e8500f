//! 文字列ユーティリティ
//!
//! スラッグ生成・真偽値の解釈・URLコンポーネントのエンコード

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// encodeURIComponent と同じ非予約文字を残すセット
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// タイトルからスラッグを生成
///
/// 小文字化 → `[a-z0-9 空白 -]` 以外を除去 → 空白の連続を `-` に →
/// `-` の連続を1つに → 前後の `-` を除去
pub fn to_slug(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref INVALID_RE: Regex = Regex::new(r"[^a-z0-9\s-]").unwrap();
        static ref SPACE_RE: Regex = Regex::new(r"\s+").unwrap();
        static ref DASH_RE: Regex = Regex::new(r"-+").unwrap();
    }

    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let cleaned = INVALID_RE.replace_all(&lowered, "");
    let dashed = SPACE_RE.replace_all(&cleaned, "-");
    let collapsed = DASH_RE.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

/// シートの「yes / true / 1 / x」を真として扱う
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "yes" | "true" | "1" | "x"
    )
}

/// URLのクエリ値としてパーセントエンコード
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
