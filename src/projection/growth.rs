//! Per-title growth curves for sales and pages-read velocity

use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// Constant-rate growth curve over a fixed number of months
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurve {
    /// Value in the first period
    pub initial_value: f64,
    /// Per-period growth rate (0.1 = +10% each period)
    pub growth_rate: f64,
    /// Number of periods produced
    pub period_count: u32,
}

impl GrowthCurve {
    pub fn new(initial_value: f64, growth_rate: f64, period_count: u32) -> Self {
        Self {
            initial_value,
            growth_rate,
            period_count,
        }
    }

    /// Fresh iterator over the curve. Each call restarts from the initial value.
    pub fn iter(&self) -> GrowthIter {
        GrowthIter {
            current: self.initial_value,
            factor: 1.0 + self.growth_rate,
            remaining: self.period_count,
        }
    }

    /// Closed-form value for a 0-based period: initial * (1 + rate)^period
    pub fn value_at(&self, period: u32) -> f64 {
        self.initial_value * (1.0 + self.growth_rate).powi(period as i32)
    }
}

impl IntoIterator for &GrowthCurve {
    type Item = f64;
    type IntoIter = GrowthIter;

    fn into_iter(self) -> GrowthIter {
        self.iter()
    }
}

/// Bounded lazy iterator produced by [`GrowthCurve::iter`]
#[derive(Debug, Clone)]
pub struct GrowthIter {
    current: f64,
    factor: f64,
    remaining: u32,
}

impl Iterator for GrowthIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.current;
        self.current *= self.factor;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for GrowthIter {}
impl FusedIterator for GrowthIter {}

/// Materialized per-month magnitudes, index 0 = month 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSeries {
    values: Vec<f64>,
}

impl GrowthSeries {
    /// Generate `period_count` values starting at `initial_value`
    pub fn generate(initial_value: f64, growth_rate: f64, period_count: u32) -> Self {
        Self::from_curve(&GrowthCurve::new(initial_value, growth_rate, period_count))
    }

    pub fn from_curve(curve: &GrowthCurve) -> Self {
        Self {
            values: curve.iter().collect(),
        }
    }

    /// Wrap externally supplied per-month values
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value for a 0-based month index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_value_is_initial() {
        let series = GrowthSeries::generate(50.0, 0.1, 24);
        assert_eq!(series.len(), 24);
        assert_eq!(series.get(0), Some(50.0));
    }

    #[test]
    fn test_each_step_multiplies_by_growth_factor() {
        let rate = 0.15;
        let series = GrowthSeries::generate(2000.0, rate, 36);
        for pair in series.as_slice().windows(2) {
            assert_eq!(pair[1], pair[0] * (1.0 + rate));
        }
    }

    #[test]
    fn test_matches_closed_form() {
        let curve = GrowthCurve::new(50.0, 0.1, 60);
        for (i, value) in curve.iter().enumerate() {
            assert_relative_eq!(value, curve.value_at(i as u32), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_rate_is_flat() {
        let series = GrowthSeries::generate(7.5, 0.0, 5);
        assert!(series.iter().all(|&v| v == 7.5));
    }

    #[test]
    fn test_iterator_is_bounded_and_restartable() {
        let curve = GrowthCurve::new(3.0, 1.0, 4);
        let mut iter = curve.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.by_ref().collect::<Vec<_>>(), vec![3.0, 6.0, 12.0, 24.0]);
        assert_eq!(iter.next(), None);

        // A second pass starts over
        assert_eq!(curve.iter().next(), Some(3.0));
        assert_eq!((&curve).into_iter().count(), 4);
    }

    #[test]
    fn test_independent_curves_do_not_interfere() {
        let sales = GrowthCurve::new(50.0, 0.1, 3);
        let pages = GrowthCurve::new(2000.0, 0.2, 3);
        let interleaved: Vec<(f64, f64)> = sales.iter().zip(pages.iter()).collect();
        assert_eq!(interleaved[0], (50.0, 2000.0));
        assert_relative_eq!(interleaved[2].0, 60.5, max_relative = 1e-12);
        assert_relative_eq!(interleaved[2].1, 2880.0, max_relative = 1e-12);
    }
}
