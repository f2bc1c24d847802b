//! Contributor / reinvestment / individual revenue split

use crate::params::SimulationParameters;
use serde::{Deserialize, Serialize};

/// Distribution policy applied to each month's revenue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueSplit {
    /// Fraction of total revenue routed to contributors
    pub contributor_share_rate: f64,
    /// Fraction of the contributor pool paid to the individual operator
    pub individual_share_rate: f64,
}

/// One month's revenue broken down by recipient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitAmounts {
    pub total: f64,
    pub contributor: f64,
    pub reinvestment: f64,
    pub individual: f64,
}

impl RevenueSplit {
    pub fn new(contributor_share_rate: f64, individual_share_rate: f64) -> Self {
        Self {
            contributor_share_rate,
            individual_share_rate,
        }
    }

    pub fn from_params(params: &SimulationParameters) -> Self {
        Self::new(params.contributor_share_rate, params.individual_share_rate)
    }

    /// Split `total` between contributors and reinvestment.
    ///
    /// Reinvestment is the remainder after the contributor share so the two
    /// always add back to `total` exactly.
    pub fn split(&self, total: f64) -> SplitAmounts {
        let contributor = total * self.contributor_share_rate;
        SplitAmounts {
            total,
            contributor,
            reinvestment: total - contributor,
            individual: contributor * self.individual_share_rate,
        }
    }
}
