//! Plain-text table and headline summary

use super::format::{format_currency, format_percent, MonthLabeler, DEFAULT_CURRENCY_SYMBOL};
use crate::params::SimulationParameters;
use crate::projection::MonthlyRecord;

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub currency_symbol: String,
    /// Label rows with calendar months instead of month numbers
    pub labeler: Option<MonthLabeler>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            labeler: None,
        }
    }
}

/// Render the cumulative table with formatted currency columns
pub fn render_table(records: &[MonthlyRecord], options: &TableOptions) -> String {
    let symbol = options.currency_symbol.as_str();
    let mut out = String::new();

    out.push_str(&format!(
        "{:>7} {:>16} {:>16} {:>16} {:>16}\n",
        "Month", "Total", "Contributor", "Reinvestment", "Individual"
    ));
    out.push_str(&"-".repeat(75));
    out.push('\n');

    for r in records {
        let month = match &options.labeler {
            Some(labeler) => labeler.label(r.month),
            None => r.month.to_string(),
        };
        out.push_str(&format!(
            "{:>7} {:>16} {:>16} {:>16} {:>16}\n",
            month,
            format_currency(r.cumulative_total, symbol),
            format_currency(r.cumulative_contributor, symbol),
            format_currency(r.cumulative_reinvestment, symbol),
            format_currency(r.cumulative_individual, symbol),
        ));
    }

    out
}

/// Two-line overview: distribution policy, then the final cumulative totals
pub fn headline_summary(
    params: &SimulationParameters,
    records: &[MonthlyRecord],
    currency_symbol: &str,
) -> String {
    let rates = params.share_rates();
    let mut out = format!(
        "Contributor share: {} | Reinvestment: {} | Individual: {}\n",
        format_percent(rates.contributor_pct),
        format_percent(rates.reinvestment_pct),
        format_percent(rates.individual_pct),
    );

    match records.last() {
        Some(last) => {
            out.push_str(&format!(
                "Final cumulative: total {} / contributor {} / reinvestment {} / individual {}",
                format_currency(last.cumulative_total, currency_symbol),
                format_currency(last.cumulative_contributor, currency_symbol),
                format_currency(last.cumulative_reinvestment, currency_symbol),
                format_currency(last.cumulative_individual, currency_symbol),
            ));
        }
        None => out.push_str("Final cumulative: no months projected"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;

    fn scenario() -> (SimulationParameters, Vec<MonthlyRecord>) {
        let params = SimulationParameters {
            sales_growth_rate: 0.0,
            initial_pages_read_per_title: 0.0,
            month_count: 2,
            ..Default::default()
        };
        let records = ProjectionEngine::default().run(&params).records;
        (params, records)
    }

    #[test]
    fn test_render_table() {
        let (_, records) = scenario();
        let table = render_table(&records, &TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Reinvestment"));
        assert!(lines[2].contains("¥10,450"));
        assert!(lines[3].contains("¥31,350"));
        assert!(lines[3].contains("¥21,945"));
    }

    #[test]
    fn test_render_table_with_calendar_months() {
        let (_, records) = scenario();
        let options = TableOptions {
            currency_symbol: "$".to_string(),
            labeler: Some(MonthLabeler::parse("2026-12").unwrap()),
        };
        let table = render_table(&records, &options);
        assert!(table.contains("2026-12"));
        assert!(table.contains("2027-01"));
        assert!(table.contains("$31,350"));
    }

    #[test]
    fn test_headline_summary() {
        let (params, records) = scenario();
        let summary = headline_summary(&params, &records, "¥");
        assert!(summary.starts_with("Contributor share: 70% | Reinvestment: 30% | Individual: 30%"));
        assert!(summary.contains("total ¥31,350"));
        assert!(summary.contains("reinvestment ¥9,405"));
    }

    #[test]
    fn test_headline_summary_without_records() {
        let summary = headline_summary(&SimulationParameters::default(), &[], "¥");
        assert!(summary.ends_with("no months projected"));
    }
}
