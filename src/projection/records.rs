//! Output structures for catalog revenue projections

use serde::{Deserialize, Serialize};

/// Cumulative totals after one simulated month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// 1-based month
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Cumulative Total")]
    pub cumulative_total: f64,
    #[serde(rename = "Cumulative Contributor")]
    pub cumulative_contributor: f64,
    #[serde(rename = "Cumulative Reinvestment")]
    pub cumulative_reinvestment: f64,
    #[serde(rename = "Cumulative Individual")]
    pub cumulative_individual: f64,
}

/// Non-cumulative quantities for a single month (detailed output only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFlows {
    pub month: u32,
    pub title_count: u64,

    // Volumes across the whole catalog
    pub units_sold: f64,
    pub pages_read: f64,

    // Income sources
    pub sales_revenue: f64,
    pub pages_revenue: f64,

    // Split of this month's revenue
    pub total_revenue: f64,
    pub contributor_revenue: f64,
    pub reinvestment_revenue: f64,
    pub individual_revenue: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// One record per month, ascending
    pub records: Vec<MonthlyRecord>,

    /// Per-month flows, empty unless detailed output was requested
    pub flows: Vec<MonthlyFlows>,

    /// Catalog size in the final month
    pub final_title_count: u64,

    /// Units sold across all titles and months
    pub total_units_sold: f64,

    /// Pages read across all titles and months
    pub total_pages_read: f64,
}

impl ProjectionResult {
    /// Final record, carrying the scenario's headline totals
    pub fn headline(&self) -> Option<&MonthlyRecord> {
        self.records.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.headline();

        ProjectionSummary {
            total_months: self.records.len() as u32,
            final_title_count: self.final_title_count,
            total_units_sold: self.total_units_sold,
            total_pages_read: self.total_pages_read,
            total_revenue: last.map(|r| r.cumulative_total).unwrap_or(0.0),
            contributor_revenue: last.map(|r| r.cumulative_contributor).unwrap_or(0.0),
            reinvestment_revenue: last.map(|r| r.cumulative_reinvestment).unwrap_or(0.0),
            individual_revenue: last.map(|r| r.cumulative_individual).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub final_title_count: u64,
    pub total_units_sold: f64,
    pub total_pages_read: f64,
    pub total_revenue: f64,
    pub contributor_revenue: f64,
    pub reinvestment_revenue: f64,
    pub individual_revenue: f64,
}
