use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::FeatureRow;
use crate::domain::row::COLUMNS;

/// Report path used when none is configured
pub const DEFAULT_OUTPUT: &str = "hole_report.csv";

/// Write the report as CSV to any writer
///
/// Format:
/// - header row `file,feature_index,polygon_area,hole_area,hole_percent`,
///   written even when there are no rows
/// - one record per row, in the order given
/// - CRLF record terminators, floats in shortest round-trip form
pub fn write_rows<W: Write>(writer: W, rows: &[FeatureRow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer
        .write_record(COLUMNS)
        .context("Failed to write CSV header")?;

    for row in rows {
        csv_writer
            .serialize(row)
            .with_context(|| format!("Failed to write row {} of {}", row.feature_index, row.file))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;

    Ok(())
}

/// Write the report to a CSV file, replacing any existing file
///
/// # Arguments
/// * `path` - Output file path
/// * `rows` - Rows in report order
pub fn write_report(path: &Path, rows: &[FeatureRow]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;

    write_rows(BufWriter::new(file), rows)
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}
