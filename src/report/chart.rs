//! Chart-ready series: cumulative lines plus the reinvestment band

use crate::projection::MonthlyRecord;
use serde::{Deserialize, Serialize};

/// Lines drawn on the cumulative chart. Reinvestment is drawn as a band instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartSeries {
    Total,
    Contributor,
    Individual,
}

impl ChartSeries {
    pub const ALL: [ChartSeries; 3] = [
        ChartSeries::Total,
        ChartSeries::Contributor,
        ChartSeries::Individual,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartSeries::Total => "Cumulative Total",
            ChartSeries::Contributor => "Cumulative Contributor",
            ChartSeries::Individual => "Cumulative Individual",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ChartSeries::Total => "black",
            ChartSeries::Contributor => "#4f8cc9",
            ChartSeries::Individual => "red",
        }
    }

    /// Individual share is drawn dashed
    pub fn dashed(&self) -> bool {
        matches!(self, ChartSeries::Individual)
    }

    fn value(&self, record: &MonthlyRecord) -> f64 {
        match self {
            ChartSeries::Total => record.cumulative_total,
            ChartSeries::Contributor => record.cumulative_contributor,
            ChartSeries::Individual => record.cumulative_individual,
        }
    }
}

/// One point of a line series (long format)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub month: u32,
    pub series: ChartSeries,
    pub value: f64,
}

/// Filled region between the contributor line and the total line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinvestmentBand {
    pub month: u32,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Grouped by series in [`ChartSeries::ALL`] order, months ascending within each
    pub lines: Vec<LinePoint>,
    pub bands: Vec<ReinvestmentBand>,
}

/// Reshape projection records for a cumulative area/line chart
pub fn chart_data(records: &[MonthlyRecord]) -> ChartData {
    let lines = ChartSeries::ALL
        .iter()
        .flat_map(|series| {
            records.iter().map(move |r| LinePoint {
                month: r.month,
                series: *series,
                value: series.value(r),
            })
        })
        .collect();

    let bands = records
        .iter()
        .map(|r| ReinvestmentBand {
            month: r.month,
            lower: r.cumulative_contributor,
            upper: r.cumulative_total,
        })
        .collect();

    ChartData { lines, bands }
}
