//! Load named scenarios from a CSV file
//!
//! Columns follow the input panel: shares are whole percentages and the
//! delivery cost is given as a file size in MB.

use super::{
    delivery_cost_for_file_size, percent_to_fraction, validate, ParameterBounds, ParameterError,
    SimulationParameters,
};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default scenario file location
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read scenario file: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario '{name}' (row {row}) is invalid: {source}")]
    InvalidScenario {
        row: usize,
        name: String,
        #[source]
        source: ParameterError,
    },
}

/// A parameter set with a label, as listed in a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub params: SimulationParameters,
}

/// Raw CSV row matching scenarios.csv columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "InitialUnits")]
    initial_units: f64,
    #[serde(rename = "SalesGrowth")]
    sales_growth: f64,
    #[serde(rename = "InitialPages")]
    initial_pages: f64,
    #[serde(rename = "PagesGrowth")]
    pages_growth: f64,
    #[serde(rename = "PagesPerTitle")]
    pages_per_title: f64,
    #[serde(rename = "NewTitlesPerMonth")]
    new_titles_per_month: u32,
    #[serde(rename = "Months")]
    months: u32,
    #[serde(rename = "RoyaltyRate")]
    royalty_rate: f64,
    #[serde(rename = "PayPerPage")]
    pay_per_page: f64,
    #[serde(rename = "FileSizeMB")]
    file_size_mb: f64,
    #[serde(rename = "ContributorSharePct")]
    contributor_share_pct: f64,
    #[serde(rename = "IndividualSharePct")]
    individual_share_pct: f64,
}

impl CsvRow {
    fn into_scenario(self, row: usize) -> Result<NamedScenario, LoadError> {
        let params = SimulationParameters {
            price: self.price,
            initial_units_per_title: self.initial_units,
            sales_growth_rate: self.sales_growth,
            initial_pages_read_per_title: self.initial_pages,
            pages_growth_rate: self.pages_growth,
            pages_per_title: self.pages_per_title,
            new_titles_per_month: self.new_titles_per_month,
            month_count: self.months,
            royalty_rate: self.royalty_rate,
            pay_per_page_rate: self.pay_per_page,
            file_size_cost_per_unit: delivery_cost_for_file_size(self.file_size_mb),
            contributor_share_rate: percent_to_fraction(self.contributor_share_pct),
            individual_share_rate: percent_to_fraction(self.individual_share_pct),
        };

        validate(&params, &ParameterBounds::unrestricted()).map_err(|source| {
            LoadError::InvalidScenario {
                row,
                name: self.name.clone(),
                source,
            }
        })?;

        Ok(NamedScenario {
            name: self.name,
            params,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, LoadError> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<NamedScenario>, LoadError> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<NamedScenario>, LoadError> {
    let mut scenarios = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(idx + 1)?);
    }

    log::debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const HEADER: &str = "Name,Price,InitialUnits,SalesGrowth,InitialPages,PagesGrowth,PagesPerTitle,NewTitlesPerMonth,Months,RoyaltyRate,PayPerPage,FileSizeMB,ContributorSharePct,IndividualSharePct";

    #[test]
    fn test_load_scenarios_from_reader() {
        let data = format!(
            "{}\nbaseline,300,50,0.1,2000,0.1,100,1,24,0.7,0.5,1.0,70,30\nslow,500,10,0,0,0,200,2,12,0.35,0.5,2.5,50,100\n",
            HEADER
        );
        let scenarios =
            load_scenarios_from_reader(data.as_bytes()).expect("Failed to load scenarios");
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "baseline");
        assert_eq!(scenarios[0].params, SimulationParameters::default());

        let slow = &scenarios[1].params;
        assert_eq!(slow.month_count, 12);
        assert_eq!(slow.new_titles_per_month, 2);
        assert_relative_eq!(slow.file_size_cost_per_unit, 2.5);
        assert_relative_eq!(slow.contributor_share_rate, 0.5);
        assert_relative_eq!(slow.individual_share_rate, 1.0);
    }

    #[test]
    fn test_invalid_row_reports_name() {
        let data = format!("{}\nbroken,300,50,0.1,2000,0.1,100,1,0,0.7,0.5,1.0,70,30\n", HEADER);
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidScenario { row, name, .. } => {
                assert_eq!(row, 1);
                assert_eq!(name, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let data = format!("{}\nbad,abc,50,0.1,2000,0.1,100,1,24,0.7,0.5,1.0,70,30\n", HEADER);
        assert!(matches!(
            load_scenarios_from_reader(data.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }
}
