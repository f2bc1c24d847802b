//! Run every scenario in a scenario file and write one summary row per scenario
//!
//! Usage: run_scenarios [scenarios.csv] [summary.csv]

use anyhow::{Context, Result};
use catalog_revenue::params::loader::{load_scenarios, DEFAULT_SCENARIOS_PATH};
use catalog_revenue::report::{format_currency, DEFAULT_CURRENCY_SYMBOL};
use catalog_revenue::scenario::ScenarioRunner;
use serde::Serialize;
use std::time::Instant;

const DEFAULT_OUTPUT_PATH: &str = "scenario_summary.csv";

/// One output row per scenario
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Months")]
    months: u32,
    #[serde(rename = "FinalTitles")]
    final_titles: u64,
    #[serde(rename = "UnitsSold")]
    units_sold: f64,
    #[serde(rename = "PagesRead")]
    pages_read: f64,
    #[serde(rename = "Total")]
    total: f64,
    #[serde(rename = "Contributor")]
    contributor: f64,
    #[serde(rename = "Reinvestment")]
    reinvestment: f64,
    #[serde(rename = "Individual")]
    individual: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_SCENARIOS_PATH.to_string());
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    let start = Instant::now();
    let scenarios = load_scenarios(&input).with_context(|| format!("loading {}", input))?;
    println!("Loaded {} scenarios from {} in {:?}", scenarios.len(), input, start.elapsed());

    let runner = ScenarioRunner::new();
    let outcomes = runner.run_named(&scenarios);

    let mut writer =
        csv::Writer::from_path(&output).with_context(|| format!("creating {}", output))?;
    for outcome in &outcomes {
        let summary = outcome.summary();
        writer.serialize(SummaryRow {
            name: &outcome.name,
            months: summary.total_months,
            final_titles: summary.final_title_count,
            units_sold: summary.total_units_sold,
            pages_read: summary.total_pages_read,
            total: summary.total_revenue,
            contributor: summary.contributor_revenue,
            reinvestment: summary.reinvestment_revenue,
            individual: summary.individual_revenue,
        })?;

        println!(
            "  {:<24} total {:>16}  individual {:>14}",
            outcome.name,
            format_currency(summary.total_revenue, DEFAULT_CURRENCY_SYMBOL),
            format_currency(summary.individual_revenue, DEFAULT_CURRENCY_SYMBOL),
        );
    }
    writer.flush()?;

    println!("\nSummary written to {}", output);
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
