//! Input-layer range checks
//!
//! The projection engine assumes validated inputs and never calls into this module.

use super::SimulationParameters;
use thiserror::Error;

/// Price band in which the 70% royalty tier applies
const HIGH_TIER_PRICE_BAND: (f64, f64) = (250.0, 1250.0);
const HIGH_TIER_ROYALTY: f64 = 0.70;

/// Rejected parameter input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Inclusive (min, max) range accepted for every input
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterBounds {
    pub price: (f64, f64),
    pub initial_units_per_title: (f64, f64),
    pub growth_rate: (f64, f64),
    pub initial_pages_read_per_title: (f64, f64),
    pub pages_per_title: (f64, f64),
    pub new_titles_per_month: (f64, f64),
    pub month_count: (f64, f64),
    pub royalty_rate: (f64, f64),
    pub pay_per_page_rate: (f64, f64),
    pub file_size_cost_per_unit: (f64, f64),
    pub share_rate: (f64, f64),
}

impl Default for ParameterBounds {
    /// Ranges offered by the interactive input panel
    fn default() -> Self {
        Self {
            price: (50.0, 2000.0),
            initial_units_per_title: (0.0, 10_000.0),
            growth_rate: (0.0, 1.0),
            initial_pages_read_per_title: (0.0, 100_000.0),
            pages_per_title: (10.0, 1000.0),
            new_titles_per_month: (0.0, 10.0),
            month_count: (1.0, 60.0),
            royalty_rate: (0.35, 0.70),
            pay_per_page_rate: (0.1, 2.0),
            file_size_cost_per_unit: (0.1, 10.0),
            share_rate: (0.0, 1.0),
        }
    }
}

impl ParameterBounds {
    /// Only the constraints the model itself needs: a non-empty horizon,
    /// royalty and share rates as fractions, and finite numbers everywhere.
    pub fn unrestricted() -> Self {
        let open = (f64::MIN, f64::MAX);
        Self {
            price: open,
            initial_units_per_title: open,
            growth_rate: open,
            initial_pages_read_per_title: open,
            pages_per_title: open,
            new_titles_per_month: open,
            month_count: (1.0, f64::MAX),
            royalty_rate: (0.0, 1.0),
            pay_per_page_rate: open,
            file_size_cost_per_unit: open,
            share_rate: (0.0, 1.0),
        }
    }
}

/// Check every parameter against `bounds`, reporting the first violation
pub fn validate(
    params: &SimulationParameters,
    bounds: &ParameterBounds,
) -> Result<(), ParameterError> {
    check("price", params.price, bounds.price)?;
    check(
        "initial_units_per_title",
        params.initial_units_per_title,
        bounds.initial_units_per_title,
    )?;
    check("sales_growth_rate", params.sales_growth_rate, bounds.growth_rate)?;
    check(
        "initial_pages_read_per_title",
        params.initial_pages_read_per_title,
        bounds.initial_pages_read_per_title,
    )?;
    check("pages_growth_rate", params.pages_growth_rate, bounds.growth_rate)?;
    check("pages_per_title", params.pages_per_title, bounds.pages_per_title)?;
    check("new_titles_per_month", params.new_titles_per_month as f64, bounds.new_titles_per_month)?;
    check("month_count", params.month_count as f64, bounds.month_count)?;
    check("royalty_rate", params.royalty_rate, bounds.royalty_rate)?;
    check("pay_per_page_rate", params.pay_per_page_rate, bounds.pay_per_page_rate)?;
    check(
        "file_size_cost_per_unit",
        params.file_size_cost_per_unit,
        bounds.file_size_cost_per_unit,
    )?;
    check("contributor_share_rate", params.contributor_share_rate, bounds.share_rate)?;
    check("individual_share_rate", params.individual_share_rate, bounds.share_rate)?;
    Ok(())
}

fn check(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite { field });
    }
    if value < min || value > max {
        return Err(ParameterError::InvalidRange { field, value, min, max });
    }
    Ok(())
}

/// Advisory message when the 70% royalty is paired with a price outside its band.
///
/// Never rejects; the caller decides whether to surface it.
pub fn royalty_tier_advisory(params: &SimulationParameters) -> Option<String> {
    let (low, high) = HIGH_TIER_PRICE_BAND;
    if params.royalty_rate >= HIGH_TIER_ROYALTY && (params.price < low || params.price > high) {
        let message = format!(
            "royalty rate {:.2} normally applies only to prices in [{}, {}], got {}",
            params.royalty_rate, low, high, params.price
        );
        log::warn!("{}", message);
        Some(message)
    } else {
        None
    }
}
