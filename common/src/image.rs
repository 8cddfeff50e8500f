//! 画像URLの解決
//!
//! シートに書かれた画像参照（ファイル名 or URL）を表示用URLに変換する。
//! - ファイル名 → `assets/img/works/<slug>/<file>`
//! - Google Driveの共有リンク → 直接画像URL（幅800）
//! - その他のURL → そのまま

use regex::Regex;

/// ローカル画像のベースディレクトリ
pub const IMG_BASE: &str = "assets/img/works/";

/// Drive直接画像のサイズ指定
const DRIVE_IMAGE_SIZE: &str = "=s800";

/// スラッグとファイル名からローカル画像パスを組み立てる
pub fn img_url(slug: &str, filename: &str) -> String {
    if slug.is_empty() || filename.is_empty() {
        return String::new();
    }
    format!("{}{}/{}", IMG_BASE, slug, filename)
}

/// Driveの共有リンクを直接画像URLに書き換える
///
/// `/d/<ファイルID>` を含むURLのみ書き換え、それ以外はそのまま返す。
pub fn drive_to_image(url: &str) -> String {
    lazy_static::lazy_static! {
        static ref DRIVE_ID_RE: Regex = Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap();
    }

    if url.is_empty() {
        return String::new();
    }

    if let Some(cap) = DRIVE_ID_RE.captures(url) {
        return format!("https://lh3.googleusercontent.com/d/{}{}", &cap[1], DRIVE_IMAGE_SIZE);
    }

    if is_direct_image(url) {
        return url.to_string();
    }

    // 画像かどうか不明なURLもそのまま使う
    url.to_string()
}

/// 拡張子から直接画像URLとみなせるか判定
pub fn is_direct_image(url: &str) -> bool {
    lazy_static::lazy_static! {
        static ref DIRECT_RE: Regex =
            Regex::new(r"(?i)^https?://.+\.(jpg|jpeg|png|gif|webp)").unwrap();
    }

    DIRECT_RE.is_match(url)
}

/// 画像参照を表示用URLに解決
pub fn resolve_image(slug: &str, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if is_web_url(value) {
        return drive_to_image(value);
    }
    img_url(slug, value)
}

fn is_web_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
