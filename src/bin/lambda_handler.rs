//! AWS Lambda handler for interactive projections
//!
//! Accepts simulation parameters as JSON (missing fields take the standard
//! defaults) and returns the cumulative table, headline totals, and chart series.

use catalog_revenue::{
    params::{royalty_tier_advisory, validate, ParameterBounds, SimulationParameters},
    projection::{MonthlyRecord, ProjectionEngine, ProjectionSummary},
    report::{chart_data, format_currency, ChartData, DEFAULT_CURRENCY_SYMBOL},
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

/// Input for one projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(default)]
    pub params: SimulationParameters,

    /// Only enforce model constraints instead of the standard input ranges
    #[serde(default)]
    pub unrestricted: bool,

    /// Include long-format chart series in the response
    #[serde(default)]
    pub include_chart: bool,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub records: Vec<MonthlyRecord>,
    pub summary: ProjectionSummary,
    pub formatted_totals: FormattedTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FormattedTotals {
    pub total: String,
    pub contributor: String,
    pub reinvestment: String,
    pub individual: String,
}

async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    let request = event.payload;

    let bounds = if request.unrestricted {
        ParameterBounds::unrestricted()
    } else {
        ParameterBounds::default()
    };
    validate(&request.params, &bounds)?;
    let advisory = royalty_tier_advisory(&request.params);

    let result = ProjectionEngine::default().run(&request.params);
    let summary = result.summary();
    let symbol = request.currency_symbol.as_str();

    log::info!(
        "projected {} months, total {:.0}",
        summary.total_months,
        summary.total_revenue
    );

    Ok(ProjectionResponse {
        formatted_totals: FormattedTotals {
            total: format_currency(summary.total_revenue, symbol),
            contributor: format_currency(summary.contributor_revenue, symbol),
            reinvestment: format_currency(summary.reinvestment_revenue, symbol),
            individual: format_currency(summary.individual_revenue, symbol),
        },
        chart: request.include_chart.then(|| chart_data(&result.records)),
        records: result.records,
        summary,
        advisory,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
