//! Simulation input parameters, validation, and scenario files

mod data;
mod validation;
pub mod loader;

pub use data::{
    SimulationParameters, ShareRates, percent_to_fraction, delivery_cost_for_file_size,
    DELIVERY_COST_PER_MB,
};
pub use validation::{validate, royalty_tier_advisory, ParameterBounds, ParameterError};
pub use loader::{load_scenarios, load_scenarios_from_reader, LoadError, NamedScenario};
