//! Scenario facade: projection plus optional simulation in one call

use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::projection::{MonthlyStatement, ProjectionEngine, ProjectionTotals};
use crate::simulation::{MonteCarloConfig, MonteCarloEngine, SimulationResult};
use serde::{Deserialize, Serialize};

/// What the caller wants evaluated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    #[serde(default)]
    pub assumptions: Assumptions,

    /// Run the Monte Carlo engine when present
    #[serde(default)]
    pub simulation: Option<MonteCarloConfig>,
}

/// Everything the presentation layer consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub statement: MonthlyStatement,
    pub totals: ProjectionTotals,
    pub cumulative_npv: Vec<f64>,
    pub simulation: Option<SimulationResult>,
}

/// Evaluates scenario requests
pub struct ScenarioRunner;

impl ScenarioRunner {
    /// Validate everything up front, then project and optionally simulate
    ///
    /// No partial report is returned: a bad simulation config fails the
    /// whole request even though the projection alone would succeed.
    pub fn run(request: &ScenarioRequest) -> Result<CaseReport> {
        let projection = ProjectionEngine::new(request.assumptions.clone())?;
        let monte_carlo = request
            .simulation
            .as_ref()
            .map(|config| MonteCarloEngine::new(request.assumptions.clone(), config.clone()))
            .transpose()?;

        let statement = projection.evaluate();
        let totals = statement.totals();
        let cumulative_npv = statement.cumulative_npv();
        let simulation = monte_carlo.map(|engine| engine.run());

        Ok(CaseReport {
            statement,
            totals,
            cumulative_npv,
            simulation,
        })
    }
}
