//! 説明文のHTML変換
//!
//! 対応する記法は `**太字**`・`*斜体*`・空行区切りの段落のみ。
//! 記法の変換より先にHTMLエスケープするので、本文中のタグは無効化される。

use regex::Regex;

/// HTMLの特殊文字5種をエスケープ
pub fn esc_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 説明文を `<p>` 段落のHTMLに変換
pub fn render_description(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref BOLD_RE: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
        static ref ITALIC_RE: Regex = Regex::new(r"\*(.+?)\*").unwrap();
        static ref PARAGRAPH_RE: Regex = Regex::new(r"\n\n+").unwrap();
    }

    if text.is_empty() {
        return String::new();
    }

    let escaped = esc_html(text);
    let bold = BOLD_RE.replace_all(&escaped, "<strong>$1</strong>");
    let html = ITALIC_RE.replace_all(&bold, "<em>$1</em>");

    PARAGRAPH_RE
        .split(&html)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", p.replace('\n', "<br>")))
        .collect()
}
