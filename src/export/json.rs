//! JSON出力

use crate::error::Result;
use portfolio_common::WorkCard;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_json(cards: &[WorkCard], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, cards)?;
    Ok(())
}
