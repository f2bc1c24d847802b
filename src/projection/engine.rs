//! Catalog revenue projector: folds the monthly growth series into cumulative records

use crate::params::SimulationParameters;
use super::growth::{GrowthCurve, GrowthSeries};
use super::records::{MonthlyFlows, MonthlyRecord, ProjectionResult};
use super::split::RevenueSplit;
use super::state::{ProjectionState, StepInputs};

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Whether to keep per-month flows in the result
    pub detailed_output: bool,
}

/// Main projection engine
///
/// Holds no per-run state, so one engine can be shared across threads and
/// repeated runs with the same inputs produce identical output.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Build both growth series from `params` and project them
    pub fn run(&self, params: &SimulationParameters) -> ProjectionResult {
        let (sales, pages) = growth_series_for(params);
        self.project_series(params, &sales, &pages)
    }

    /// Project caller-supplied velocity series.
    ///
    /// Both series must hold `params.month_count` values; the output has one
    /// record per value.
    pub fn project_series(
        &self,
        params: &SimulationParameters,
        sales: &GrowthSeries,
        pages: &GrowthSeries,
    ) -> ProjectionResult {
        debug_assert_eq!(sales.len(), pages.len(), "velocity series lengths differ");
        debug_assert_eq!(sales.len(), params.month_count as usize, "series length != month_count");

        let inputs = StepInputs {
            new_titles_per_month: params.new_titles_per_month,
            revenue_per_unit: params.revenue_per_unit(),
            pay_per_page_rate: params.pay_per_page_rate,
            split: RevenueSplit::from_params(params),
        };

        log::debug!(
            "projecting {} months: {} new titles/month, {:.2} net per unit",
            sales.len(),
            inputs.new_titles_per_month,
            inputs.revenue_per_unit
        );

        let (records, flows): (Vec<MonthlyRecord>, Vec<MonthlyFlows>) = sales
            .iter()
            .zip(pages.iter())
            .scan(ProjectionState::default(), |state, (&sales_velocity, &pages_velocity)| {
                let (next, flows) = state.step(&inputs, sales_velocity, pages_velocity);
                *state = next;
                log::trace!(
                    "month {}: titles={} revenue={:.2} cumulative={:.2}",
                    next.month,
                    next.title_count,
                    flows.total_revenue,
                    next.cumulative_total
                );
                Some((next.snapshot(), flows))
            })
            .unzip();

        let final_title_count = flows.last().map(|f| f.title_count).unwrap_or(0);
        let total_units_sold = flows.iter().map(|f| f.units_sold).sum();
        let total_pages_read = flows.iter().map(|f| f.pages_read).sum();

        ProjectionResult {
            records,
            flows: if self.config.detailed_output { flows } else { Vec::new() },
            final_title_count,
            total_units_sold,
            total_pages_read,
        }
    }
}

/// Sales-velocity and pages-velocity series for `params`
pub fn growth_series_for(params: &SimulationParameters) -> (GrowthSeries, GrowthSeries) {
    let sales = GrowthSeries::from_curve(&GrowthCurve::new(
        params.initial_units_per_title,
        params.sales_growth_rate,
        params.month_count,
    ));
    let pages = GrowthSeries::from_curve(&GrowthCurve::new(
        params.initial_pages_read_per_title,
        params.pages_growth_rate,
        params.month_count,
    ));
    (sales, pages)
}

/// Project cumulative revenue for a catalog.
///
/// Returns exactly one record per month, ascending from month 1; the last
/// record holds the headline totals.
pub fn project(
    params: &SimulationParameters,
    sales: &GrowthSeries,
    pages: &GrowthSeries,
) -> Vec<MonthlyRecord> {
    ProjectionEngine::default().project_series(params, sales, pages).records
}
