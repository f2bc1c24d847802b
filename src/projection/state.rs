//! Running accumulator threaded through the monthly fold

use super::records::{MonthlyFlows, MonthlyRecord};
use super::split::RevenueSplit;

/// Static per-run inputs to each monthly step
#[derive(Debug, Clone, Copy)]
pub struct StepInputs {
    pub new_titles_per_month: u32,
    pub revenue_per_unit: f64,
    pub pay_per_page_rate: f64,
    pub split: RevenueSplit,
}

/// Catalog size and cumulative totals as of the last completed month
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectionState {
    /// Last completed month (0 before the first step)
    pub month: u32,

    /// Titles in the catalog; titles are never retired
    pub title_count: u64,

    pub cumulative_total: f64,
    pub cumulative_contributor: f64,
    pub cumulative_reinvestment: f64,
    pub cumulative_individual: f64,
}

impl ProjectionState {
    /// Advance one month.
    ///
    /// New titles join the catalog before revenue is computed, and the current
    /// per-title velocities apply to every title regardless of its age.
    ///
    /// Cumulative reinvestment is the cumulative total minus the cumulative
    /// contributor share, so the two always add back to the running total.
    pub fn step(
        self,
        inputs: &StepInputs,
        sales_velocity: f64,
        pages_velocity: f64,
    ) -> (Self, MonthlyFlows) {
        let month = self.month + 1;
        let title_count = self.title_count + u64::from(inputs.new_titles_per_month);
        let titles = title_count as f64;

        let units_sold = sales_velocity * titles;
        let pages_read = pages_velocity * titles;
        let sales_revenue = units_sold * inputs.revenue_per_unit;
        let pages_revenue = pages_read * inputs.pay_per_page_rate;
        let amounts = inputs.split.split(sales_revenue + pages_revenue);

        let cumulative_total = self.cumulative_total + amounts.total;
        let cumulative_contributor = self.cumulative_contributor + amounts.contributor;

        let next = Self {
            month,
            title_count,
            cumulative_total,
            cumulative_contributor,
            cumulative_reinvestment: cumulative_total - cumulative_contributor,
            cumulative_individual: self.cumulative_individual + amounts.individual,
        };

        let flows = MonthlyFlows {
            month,
            title_count,
            units_sold,
            pages_read,
            sales_revenue,
            pages_revenue,
            total_revenue: amounts.total,
            contributor_revenue: amounts.contributor,
            reinvestment_revenue: amounts.reinvestment,
            individual_revenue: amounts.individual,
        };

        (next, flows)
    }

    /// Snapshot of the cumulative totals
    pub fn snapshot(&self) -> MonthlyRecord {
        MonthlyRecord {
            month: self.month,
            cumulative_total: self.cumulative_total,
            cumulative_contributor: self.cumulative_contributor,
            cumulative_reinvestment: self.cumulative_reinvestment,
            cumulative_individual: self.cumulative_individual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> StepInputs {
        StepInputs {
            new_titles_per_month: 1,
            revenue_per_unit: 209.0,
            pay_per_page_rate: 0.5,
            split: RevenueSplit::new(0.7, 0.3),
        }
    }

    #[test]
    fn test_titles_added_before_revenue() {
        let (state, flows) = ProjectionState::default().step(&inputs(), 50.0, 0.0);
        assert_eq!(state.month, 1);
        assert_eq!(state.title_count, 1);
        assert_eq!(flows.units_sold, 50.0);
        assert_eq!(flows.sales_revenue, 10_450.0);
    }

    #[test]
    fn test_velocity_applies_to_whole_catalog() {
        let (state, _) = ProjectionState::default().step(&inputs(), 50.0, 100.0);
        let (state, flows) = state.step(&inputs(), 50.0, 100.0);
        assert_eq!(state.title_count, 2);
        assert_eq!(flows.units_sold, 100.0);
        assert_eq!(flows.pages_read, 200.0);
        assert_eq!(flows.pages_revenue, 100.0);
    }

    #[test]
    fn test_snapshot_reflects_cumulative_totals() {
        let (state, _) = ProjectionState::default().step(&inputs(), 50.0, 0.0);
        let (state, _) = state.step(&inputs(), 50.0, 0.0);
        let record = state.snapshot();
        assert_eq!(record.month, 2);
        assert_eq!(record.cumulative_total, 31_350.0);
    }

    #[test]
    fn test_cumulative_reinvestment_is_complement() {
        let inputs = StepInputs {
            pay_per_page_rate: 0.47,
            split: RevenueSplit::new(0.7, 0.3),
            ..inputs()
        };
        let mut state = ProjectionState::default();
        for m in 0..60 {
            let velocity = 50.0 * 1.1f64.powi(m);
            let (next, _) = state.step(&inputs, velocity, velocity * 37.3);
            assert_eq!(
                next.cumulative_contributor + next.cumulative_reinvestment,
                next.cumulative_total,
                "month {}",
                next.month
            );
            state = next;
        }
    }

    #[test]
    fn test_no_new_titles_means_no_revenue() {
        let no_titles = StepInputs {
            new_titles_per_month: 0,
            ..inputs()
        };
        let (state, flows) = ProjectionState::default().step(&no_titles, 50.0, 2000.0);
        assert_eq!(state.title_count, 0);
        assert_eq!(flows.total_revenue, 0.0);
        assert_eq!(state.cumulative_total, 0.0);
    }
}
