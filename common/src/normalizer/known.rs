//! 既知の作品テーブル
//!
//! 説明文がまだ入っていない旧データでも詳細ページを出すための対応表。

/// タイトルの部分一致パターンとスラッグ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownWork {
    /// 小文字のタイトルに含まれるか判定する文字列
    pub pattern: &'static str,
    pub slug: &'static str,
}

const fn known(pattern: &'static str, slug: &'static str) -> KnownWork {
    KnownWork { pattern, slug }
}

pub const KNOWN_WORKS: [KnownWork; 8] = [
    known("ceing", "ceing-experiment"),
    known("khwan", "khwan-dance"),
    known("kong", "kong-interactive"),
    known("zer01ne", "zer0ne-korea"),
    known("zer0ne", "zer0ne-korea"),
    known("technobiological", "technobiological-futures"),
    known("data mask", "data-mask"),
    known("posthuman", "data-mask"),
];

/// タイトルに一致する既知作品のスラッグ（先に一致したものを優先）
pub fn known_work_slug(title: &str) -> Option<&'static str> {
    let title = title.to_lowercase();
    KNOWN_WORKS
        .iter()
        .find(|known| title.contains(known.pattern))
        .map(|known| known.slug)
}
