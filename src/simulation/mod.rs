//! Monte Carlo uncertainty engine

mod monte_carlo;
pub mod stats;

pub use monte_carlo::{
    simulate, MonteCarloConfig, MonteCarloEngine, SimulationResult, TrialOutcome,
    DEFAULT_REVENUE_VOLATILITY, DEFAULT_TRIALS,
};
pub use stats::SummaryStats;
