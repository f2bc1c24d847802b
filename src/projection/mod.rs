//! Projection engine for catalog revenue

mod growth;
mod split;
mod state;
mod engine;
mod records;

pub use growth::{GrowthCurve, GrowthIter, GrowthSeries};
pub use split::{RevenueSplit, SplitAmounts};
pub use state::{ProjectionState, StepInputs};
pub use engine::{project, growth_series_for, ProjectionEngine, ProjectionConfig};
pub use records::{MonthlyFlows, MonthlyRecord, ProjectionResult, ProjectionSummary};
