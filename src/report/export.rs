//! CSV and JSON export of projection results

use super::ReportError;
use crate::projection::{MonthlyFlows, MonthlyRecord, ProjectionResult};
use std::io::Write;
use std::path::Path;

/// Write cumulative records as CSV with unformatted numbers
pub fn write_csv<W: Write>(records: &[MonthlyRecord], writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write cumulative records to a CSV file
pub fn write_csv_path<P: AsRef<Path>>(
    records: &[MonthlyRecord],
    path: P,
) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)
}

/// Write per-month flows as CSV
pub fn write_flows_csv<W: Write>(flows: &[MonthlyFlows], writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in flows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Pretty-printed JSON for a full result
pub fn to_json(result: &ProjectionResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}
