pub mod csv;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use portfolio_common::WorkCard;
use std::path::{Path, PathBuf};

/// ディレクトリ指定なら `works.<拡張子>` を付ける
pub fn output_path_for_format(output: &Path, format: ExportFormat) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("works.{}", format.extension()))
    } else {
        output.to_path_buf()
    }
}

/// 作品カードをファイルに出力し、出力先パスを返す
pub fn export_works(cards: &[WorkCard], format: ExportFormat, output: &Path) -> Result<PathBuf> {
    let output_path = output_path_for_format(output, format);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match format {
        ExportFormat::Json => json::write_json(cards, &output_path)?,
        ExportFormat::Csv => csv::write_csv(cards, &output_path)?,
    }

    tracing::debug!(path = %output_path.display(), count = cards.len(), "出力完了");
    Ok(output_path)
}
