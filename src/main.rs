//! Catalog Revenue CLI
//!
//! Runs a single projection from command-line parameters and prints the
//! cumulative table, optionally writing CSV or JSON output.

use anyhow::{Context, Result};
use catalog_revenue::{
    params::{
        delivery_cost_for_file_size, percent_to_fraction, royalty_tier_advisory, validate,
        ParameterBounds, SimulationParameters,
    },
    projection::{ProjectionConfig, ProjectionEngine},
    report::{
        headline_summary, render_table, to_json, write_csv_path, write_flows_csv, MonthLabeler,
        TableOptions, DEFAULT_CURRENCY_SYMBOL,
    },
};
use clap::Parser;
use std::path::PathBuf;

/// Project cumulative e-book catalog revenue
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sale price per unit
    #[arg(long, default_value_t = 300.0)]
    price: f64,

    /// Units sold per title in the first month
    #[arg(long, default_value_t = 50.0)]
    initial_units: f64,

    /// Monthly growth rate of unit sales (0.1 = 10%)
    #[arg(long, default_value_t = 0.1)]
    sales_growth: f64,

    /// Pages read per title in the first month
    #[arg(long, default_value_t = 2000.0)]
    initial_pages: f64,

    /// Monthly growth rate of pages read
    #[arg(long, default_value_t = 0.1)]
    pages_growth: f64,

    /// Normalized page length of a title (informational)
    #[arg(long, default_value_t = 100.0)]
    pages_per_title: f64,

    /// New titles released each month
    #[arg(long, default_value_t = 1)]
    new_titles: u32,

    /// Months to project
    #[arg(long, default_value_t = 24)]
    months: u32,

    /// Royalty rate as a fraction of price
    #[arg(long, default_value_t = 0.7)]
    royalty_rate: f64,

    /// Earnings per page read
    #[arg(long, default_value_t = 0.5)]
    pay_per_page: f64,

    /// Delivery file size in MB (charged per unit sold)
    #[arg(long, default_value_t = 1.0)]
    file_size_mb: f64,

    /// Percent of revenue paid to contributors
    #[arg(long, default_value_t = 70.0)]
    contributor_share: f64,

    /// Percent of the contributor pool paid to you
    #[arg(long, default_value_t = 30.0)]
    individual_share: f64,

    /// Only enforce model constraints instead of the standard input ranges
    #[arg(long)]
    unrestricted: bool,

    /// Currency symbol for display
    #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
    currency: String,

    /// Calendar month of projection month 1 (YYYY-MM)
    #[arg(long)]
    start_month: Option<String>,

    /// Write cumulative records to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write per-month flows to this CSV file
    #[arg(long)]
    flows_output: Option<PathBuf>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn parameters(&self) -> SimulationParameters {
        SimulationParameters {
            price: self.price,
            initial_units_per_title: self.initial_units,
            sales_growth_rate: self.sales_growth,
            initial_pages_read_per_title: self.initial_pages,
            pages_growth_rate: self.pages_growth,
            pages_per_title: self.pages_per_title,
            new_titles_per_month: self.new_titles,
            month_count: self.months,
            royalty_rate: self.royalty_rate,
            pay_per_page_rate: self.pay_per_page,
            file_size_cost_per_unit: delivery_cost_for_file_size(self.file_size_mb),
            contributor_share_rate: percent_to_fraction(self.contributor_share),
            individual_share_rate: percent_to_fraction(self.individual_share),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.parameters();

    let bounds = if cli.unrestricted {
        ParameterBounds::unrestricted()
    } else {
        ParameterBounds::default()
    };
    validate(&params, &bounds).context("invalid parameters")?;
    if let Some(advisory) = royalty_tier_advisory(&params) {
        eprintln!("note: {}", advisory);
    }

    let labeler = cli
        .start_month
        .as_deref()
        .map(MonthLabeler::parse)
        .transpose()?;

    let engine = ProjectionEngine::new(ProjectionConfig {
        detailed_output: cli.flows_output.is_some() || cli.json,
    });
    let result = engine.run(&params);

    if cli.json {
        println!("{}", to_json(&result)?);
    } else {
        println!("{}\n", headline_summary(&params, &result.records, &cli.currency));
        let options = TableOptions {
            currency_symbol: cli.currency.clone(),
            labeler,
        };
        print!("{}", render_table(&result.records, &options));
    }

    if let Some(path) = &cli.output {
        write_csv_path(&result.records, path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("cumulative records written to {}", path.display());
    }

    if let Some(path) = &cli.flows_output {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        write_flows_csv(&result.flows, file)?;
        log::info!("monthly flows written to {}", path.display());
    }

    Ok(())
}
