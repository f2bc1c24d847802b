//! Scenario runner for batch projections
//!
//! Holds one engine configuration and runs many parameter sets against it,
//! in parallel where there is more than one.

use crate::params::{NamedScenario, SimulationParameters};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary};
use rayon::prelude::*;
use serde::Serialize;

/// Result of one named scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: ProjectionResult,
}

impl ScenarioOutcome {
    pub fn summary(&self) -> ProjectionSummary {
        self.result.summary()
    }
}

/// Batch projection runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let scenarios = load_scenarios("data/scenarios.csv")?;
/// for outcome in runner.run_named(&scenarios) {
///     println!("{}: {:.0}", outcome.name, outcome.summary().total_revenue);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with default engine config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a specific engine config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, params: &SimulationParameters) -> ProjectionResult {
        self.engine.run(params)
    }

    /// Run many parameter sets in parallel, results in input order
    pub fn run_batch(&self, params: &[SimulationParameters]) -> Vec<ProjectionResult> {
        log::info!("running {} scenarios", params.len());
        params.par_iter().map(|p| self.engine.run(p)).collect()
    }

    /// Run named scenarios in parallel, results in input order
    pub fn run_named(&self, scenarios: &[NamedScenario]) -> Vec<ScenarioOutcome> {
        log::info!("running {} named scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|s| ScenarioOutcome {
                name: s.name.clone(),
                result: self.engine.run(&s.params),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_matches_sequential_runs() {
        let runner = ScenarioRunner::new();
        let params: Vec<_> = [0.0, 0.05, 0.1, 0.2]
            .iter()
            .map(|&rate| SimulationParameters {
                sales_growth_rate: rate,
                month_count: 36,
                ..Default::default()
            })
            .collect();

        let batch = runner.run_batch(&params);
        assert_eq!(batch.len(), 4);
        for (p, result) in params.iter().zip(&batch) {
            assert_eq!(result, &runner.run(p));
        }

        // Faster sales growth should end with more revenue
        assert!(batch[3].summary().total_revenue > batch[0].summary().total_revenue);
    }

    #[test]
    fn test_named_scenarios_keep_order() {
        let runner = ScenarioRunner::with_config(ProjectionConfig { detailed_output: true });
        let scenarios: Vec<_> = (1..=5)
            .map(|n| NamedScenario {
                name: format!("titles_{}", n),
                params: SimulationParameters {
                    new_titles_per_month: n,
                    ..Default::default()
                },
            })
            .collect();

        let outcomes = runner.run_named(&scenarios);
        for (n, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.name, format!("titles_{}", n + 1));
            assert_eq!(outcome.summary().final_title_count, (n as u64 + 1) * 24);
            assert_eq!(outcome.result.flows.len(), 24);
        }
    }
}
