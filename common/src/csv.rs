//! CSVパーサーと列検索
//!
//! Google SheetsのCSVエクスポートを行・フィールドに分解する。
//! - ダブルクォート内のカンマ・改行はリテラル
//! - `""` はクォート内で `"` 1文字
//! - 各フィールドは前後の空白を除去
//! - 空行（フィールド1つだけで空）は出力しない

use crate::types::RawRow;
use std::mem::take;

/// CSVテキストを行の配列に変換
///
/// 行区切りは `\n` または `\r\n`。単独の `\r` は通常の文字として扱う。
/// 末尾に改行がなくても最後の行を出力する（閉じていないクォートも同様）。
///
/// # Examples
/// ```
/// use portfolio_common::parse_csv;
///
/// let rows = parse_csv("a,\"b,c\",d\n");
/// assert_eq!(rows, vec![vec!["a", "b,c", "d"]]);
/// ```
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let mut rows = Vec::new();
    let mut row: RawRow = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // "" エスケープ
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => row.push(take(&mut field).trim().to_string()),
            '\n' => end_row(&mut rows, &mut row, &mut field),
            '\r' if matches!(chars.peek(), Some('\n')) => {
                chars.next();
                end_row(&mut rows, &mut row, &mut field);
            }
            _ => field.push(ch),
        }
    }

    end_row(&mut rows, &mut row, &mut field);
    rows
}

/// 現在のフィールドを確定し、空行でなければ行を追加
fn end_row(rows: &mut Vec<RawRow>, row: &mut RawRow, field: &mut String) {
    row.push(take(field).trim().to_string());
    if row.len() > 1 || !row[0].is_empty() {
        rows.push(take(row));
    } else {
        row.clear();
    }
}

/// ヘッダーから列番号を検索
///
/// `patterns` を優先順に調べ、いずれかのヘッダーに（大文字小文字を区別せず）
/// 部分一致した最初のパターンについて、最初に一致したヘッダーの位置を返す。
pub fn find_col<S: AsRef<str>>(headers: &[S], patterns: &[&str]) -> Option<usize> {
    let lowered: Vec<String> = headers.iter().map(|h| h.as_ref().to_lowercase()).collect();

    patterns.iter().find_map(|pattern| {
        let pattern = pattern.to_lowercase();
        lowered.iter().position(|h| h.contains(&pattern))
    })
}

/// ヘッダー名をレコードのキーに変換
///
/// 小文字化し、英数字以外を `_` に置換、連続する `_` を1つにまとめ、
/// 前後の `_` を除去する。
pub fn sanitize_header(header: &str) -> String {
    let mut key = String::with_capacity(header.len());
    for ch in header.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            key.push(ch);
        } else if !key.ends_with('_') {
            key.push('_');
        }
    }
    key.trim_matches('_').to_string()
}
