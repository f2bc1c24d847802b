//! Parameter structures matching the calculator's input panel

use serde::{Deserialize, Serialize};

/// Delivery cost charged per megabyte of file size on each unit sale (70% royalty tier)
pub const DELIVERY_COST_PER_MB: f64 = 1.0;

/// Inputs for one projection run
///
/// Rates are fractions (0.7 = 70%). Nothing here is checked by the engine;
/// see [`crate::params::validate`] for the input-layer bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Unit sale price
    pub price: f64,

    /// Units sold per title in month 1
    pub initial_units_per_title: f64,

    /// Month-over-month growth of per-title unit sales
    pub sales_growth_rate: f64,

    /// Pages read per title in month 1
    pub initial_pages_read_per_title: f64,

    /// Month-over-month growth of per-title pages read
    pub pages_growth_rate: f64,

    /// Normalized page length of a title. Accepted for display only,
    /// the revenue arithmetic does not use it.
    pub pages_per_title: f64,

    /// Titles added to the catalog every month
    pub new_titles_per_month: u32,

    /// Projection horizon in months
    pub month_count: u32,

    /// Fraction of price retained per unit sale
    pub royalty_rate: f64,

    /// Currency earned per page read
    pub pay_per_page_rate: f64,

    /// Fixed cost subtracted once per unit sold
    pub file_size_cost_per_unit: f64,

    /// Fraction of monthly revenue routed to the contributor pool
    pub contributor_share_rate: f64,

    /// Fraction of the contributor pool paid to the individual operator
    pub individual_share_rate: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            price: 300.0,
            initial_units_per_title: 50.0,
            sales_growth_rate: 0.10,
            initial_pages_read_per_title: 2000.0,
            pages_growth_rate: 0.10,
            pages_per_title: 100.0,
            new_titles_per_month: 1,
            month_count: 24,
            royalty_rate: 0.70,
            pay_per_page_rate: 0.5,
            file_size_cost_per_unit: delivery_cost_for_file_size(1.0),
            contributor_share_rate: 0.70,
            individual_share_rate: 0.30,
        }
    }
}

impl SimulationParameters {
    /// Net royalty earned on a single unit sale.
    ///
    /// Negative when the delivery cost exceeds the royalty portion of the price.
    pub fn revenue_per_unit(&self) -> f64 {
        self.price * self.royalty_rate - self.file_size_cost_per_unit
    }

    /// Share rates expressed as whole percentages for display
    pub fn share_rates(&self) -> ShareRates {
        ShareRates::from_fractions(self.contributor_share_rate, self.individual_share_rate)
    }
}

/// Revenue distribution policy in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareRates {
    pub contributor_pct: f64,
    pub reinvestment_pct: f64,
    pub individual_pct: f64,
}

impl ShareRates {
    pub fn from_fractions(contributor: f64, individual: f64) -> Self {
        let contributor_pct = contributor * 100.0;
        Self {
            contributor_pct,
            reinvestment_pct: 100.0 - contributor_pct,
            individual_pct: individual * 100.0,
        }
    }
}

/// Convert a whole percentage (70) into a fraction (0.7)
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

/// Per-unit delivery cost for a file of the given size in MB
pub fn delivery_cost_for_file_size(file_size_mb: f64) -> f64 {
    file_size_mb * DELIVERY_COST_PER_MB
}
