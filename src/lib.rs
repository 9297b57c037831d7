//! Integration Case - projection engine for integration business cases
//!
//! This library provides:
//! - Deterministic month-by-month revenue, cost and profitability statements
//! - NPV discounting of net income at a monthly WACC
//! - Monte Carlo resampling of new-logo revenue with reproducible seeding
//! - JSON assumption loading and CSV statement export

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod simulation;
pub mod scenario;

// Re-export commonly used types
pub use error::{ModelError, Result};
pub use assumptions::Assumptions;
pub use projection::{evaluate, MonthlyStatement, ProjectionEngine, StatementRow};
pub use simulation::{simulate, MonteCarloConfig, MonteCarloEngine, SimulationResult, SummaryStats};
pub use scenario::{CaseReport, ScenarioRequest, ScenarioRunner};
