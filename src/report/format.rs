//! Number and date formatting for display

use super::ReportError;
use chrono::{Months, NaiveDate};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "¥";

/// Format as currency: symbol, thousands separators, no decimals.
///
/// `format_currency(1234567.6, "¥")` gives `¥1,234,568`; negatives get a
/// leading minus (`-¥75`).
pub fn format_currency(value: f64, symbol: &str) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);

    if rounded < 0.0 {
        format!("-{}{}", symbol, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    }
}

/// Whole-number percentage, e.g. `70%`
pub fn format_percent(pct: f64) -> String {
    format!("{:.0}%", pct)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Maps projection months onto calendar months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabeler {
    start: NaiveDate,
}

impl MonthLabeler {
    /// Parse a `YYYY-MM` start month (month 1 of the projection)
    pub fn parse(start: &str) -> Result<Self, ReportError> {
        NaiveDate::parse_from_str(&format!("{}-01", start.trim()), "%Y-%m-%d")
            .map(|start| Self { start })
            .map_err(|_| ReportError::InvalidStartMonth(start.to_string()))
    }

    /// Calendar label (`YYYY-MM`) for a 1-based projection month
    pub fn label(&self, month: u32) -> String {
        self.start
            .checked_add_months(Months::new(month.saturating_sub(1)))
            .map(|d| d.format("%Y-%m").to_string())
            .unwrap_or_else(|| month.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "¥"), "¥0");
        assert_eq!(format_currency(999.4, "¥"), "¥999");
        assert_eq!(format_currency(1000.0, "¥"), "¥1,000");
        assert_eq!(format_currency(31_350.0, "¥"), "¥31,350");
        assert_eq!(format_currency(1_234_567.6, "$"), "$1,234,568");
    }

    #[test]
    fn test_format_negative_currency() {
        assert_eq!(format_currency(-75.0, "¥"), "-¥75");
        assert_eq!(format_currency(-1_500_000.0, "¥"), "-¥1,500,000");
        assert_eq!(format_currency(-0.2, "¥"), "¥0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(70.0), "70%");
        assert_eq!(format_percent(29.999999), "30%");
    }

    #[test]
    fn test_month_labels_roll_over_year() {
        let labeler = MonthLabeler::parse("2026-11").unwrap();
        assert_eq!(labeler.label(1), "2026-11");
        assert_eq!(labeler.label(2), "2026-12");
        assert_eq!(labeler.label(3), "2027-01");
        assert_eq!(labeler.label(26), "2028-12");
    }

    #[test]
    fn test_bad_start_month() {
        assert!(matches!(
            MonthLabeler::parse("2026-13"),
            Err(ReportError::InvalidStartMonth(_))
        ));
        assert!(MonthLabeler::parse("soon").is_err());
    }
}
