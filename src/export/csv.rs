//! CSV出力
//!
//! シートに貼り戻せるよう、正規化済みの列と派生属性を1行1作品で書き出す。

use crate::error::Result;
use portfolio_common::WorkCard;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const HEADERS: &[&str] = &[
    "slug", "title", "year", "type", "medium", "venue", "city", "country", "collaborators",
    "featured", "featured_order", "thumb", "hero", "status", "tags", "url", "category", "accent",
];

pub fn write_csv(cards: &[WorkCard], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_cards(&mut writer, cards)?;
    writer.flush()?;
    Ok(())
}

/// ヘッダーと全作品を書き出す
pub fn write_cards<W: Write>(mut w: W, cards: &[WorkCard]) -> io::Result<()> {
    write_row(&mut w, HEADERS.iter().copied())?;

    for card in cards {
        let work = &card.work;
        let featured = if work.featured { "yes" } else { "" };
        let order = work.featured_order.to_string();
        let fields: [&str; 18] = [
            &work.slug,
            &work.title,
            &work.year,
            &work.work_type,
            &work.medium,
            &work.venue,
            &work.city,
            &work.country,
            &work.collaborators,
            featured,
            &order,
            &work.thumb,
            &work.hero,
            &work.status,
            &work.tags,
            &card.url,
            &card.category,
            &card.accent,
        ];
        write_row(&mut w, fields)?;
    }
    Ok(())
}

fn needs_quotes(field: &str) -> bool {
    field.contains([',', '"', '\n', '\r'])
}

/// 1行を書き出す（必要なフィールドのみクォート）
pub fn write_row<'a, W: Write>(
    mut w: W,
    fields: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            write!(w, ",")?;
        }
        if needs_quotes(field) {
            write!(w, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", field)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_common::{parse_csv, Work};

    #[test]
    fn test_write_row_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, ["plain", "a,b", "say \"hi\"", "two\nlines"]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\"\n"
        );
    }

    #[test]
    fn test_write_cards_parses_back() {
        let card = WorkCard::from_work(Work {
            slug: "data-mask".into(),
            title: "Data Mask, Posthuman".into(),
            work_type: "AI / Performance".into(),
            featured: true,
            featured_order: 2,
            ..Default::default()
        });

        let mut buf = Vec::new();
        write_cards(&mut buf, &[card]).unwrap();
        let rows = parse_csv(&String::from_utf8(buf).unwrap());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), HEADERS.len());
        assert_eq!(rows[1][1], "Data Mask, Posthuman");
        assert_eq!(rows[1][9], "yes");
        assert_eq!(rows[1][10], "2");
        assert_eq!(rows[1][16], "AI");
    }
}
