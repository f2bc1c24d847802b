//! Presentation adapters over projection output
//!
//! Formatting, tables, exports and chart shaping. Nothing here feeds back into
//! the projection arithmetic.

mod format;
mod chart;
mod export;
mod table;

pub use format::{format_currency, format_percent, MonthLabeler, DEFAULT_CURRENCY_SYMBOL};
pub use chart::{chart_data, ChartData, ChartSeries, LinePoint, ReinvestmentBand};
pub use export::{write_csv, write_csv_path, write_flows_csv, to_json};
pub use table::{headline_summary, render_table, TableOptions};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid start month '{0}', expected YYYY-MM")]
    InvalidStartMonth(String),
}
