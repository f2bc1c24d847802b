//! Catalog Revenue - cumulative revenue projections for self-published e-book catalogs
//!
//! This library provides:
//! - Per-title growth curves for unit sales and pages read
//! - A monthly projection over an accumulating catalog of titles
//! - Contributor / reinvestment / individual revenue splits
//! - Input validation, scenario files, and report formatting
//! - Parallel batch runs over many scenarios

pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use params::{SimulationParameters, ParameterBounds, ParameterError};
pub use projection::{project, GrowthSeries, MonthlyRecord, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
