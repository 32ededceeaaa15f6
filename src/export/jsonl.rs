//! JSONL export functionality.
//!
//! Exports analysis results as one JSON object per line, suitable for
//! piping into other tools.

use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::row::ExportRow;

/// Writes export rows as JSONL, to the given file or stdout when `output`
/// is `None`. Returns the number of records written.
pub fn export_jsonl(rows: &[ExportRow], output: Option<&PathBuf>) -> Result<usize> {
    let mut writer: BufWriter<Box<dyn Write>> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        BufWriter::new(Box::new(file) as Box<dyn Write>)
    } else {
        BufWriter::new(Box::new(io::stdout()) as Box<dyn Write>)
    };

    for row in rows {
        let line = serde_json::to_string(row).context("Failed to serialize export row")?;
        writeln!(writer, "{}", line)?;
    }

    writer.flush()?;
    Ok(rows.len())
}
