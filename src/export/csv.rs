//! CSV export functionality.
//!
//! Exports analysis results to CSV format (simplified, flattened view).
//! One row per post with the analysis data flattened into columns.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::{self, Write};
use std::path::PathBuf;

use super::row::{ExportRow, CSV_HEADER};

/// Writes export rows to CSV, to the given file or stdout when `output` is
/// `None`. Returns the number of records written.
pub fn export_csv(rows: &[ExportRow], output: Option<&PathBuf>) -> Result<usize> {
    // Use a trait object so file and stdout share one writer type
    let mut writer: Writer<Box<dyn Write>> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Writer::from_writer(Box::new(file) as Box<dyn Write>)
    } else {
        Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>)
    };

    writer.write_record(CSV_HEADER)?;

    for row in rows {
        writer.write_record(&[
            row.title.clone(),
            row.url.clone(),
            row.score.to_string(),
            row.focus_keyword.clone(),
            row.description_length.to_string(),
            row.word_count.to_string(),
            row.reading_time_minutes.to_string(),
            if row.has_featured_image { "true" } else { "false" }.to_string(),
            row.published_date.clone(),
            row.good_findings.to_string(),
            row.warning_findings.to_string(),
            row.error_findings.to_string(),
            row.readability_level.clone(),
            format!("{:.1}", row.flesch_score),
            row.internal_links.to_string(),
            row.external_links.to_string(),
            row.heading_count.to_string(),
            row.image_count.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(rows.len())
}
