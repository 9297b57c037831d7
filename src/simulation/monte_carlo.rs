//! Monte Carlo resampling of new-logo revenue
//!
//! Each trial redraws the new-logo revenue column from a normal
//! distribution centred on the deterministic value, keeps recurring
//! revenue fixed, and re-derives costs, profit and NPV through the same
//! statement derivation as the baseline.

use super::stats::SummaryStats;
use crate::assumptions::Assumptions;
use crate::error::{ModelError, Result};
use crate::projection::{derive_statement, RevenueSchedule};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Standard deviation of resampled new-logo revenue as a fraction of its mean
pub const DEFAULT_REVENUE_VOLATILITY: f64 = 0.10;

/// Default number of trials
pub const DEFAULT_TRIALS: u32 = 1000;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    /// Number of independent trials (at least 1)
    pub trials: u32,
    /// Base seed; drawn from the thread RNG when absent
    pub seed: Option<u64>,
    /// Std-dev of new-logo revenue relative to its mean
    pub revenue_volatility: f64,
    /// Spread trials across the rayon pool
    pub parallel: bool,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            revenue_volatility: DEFAULT_REVENUE_VOLATILITY,
            parallel: true,
        }
    }
}

impl MonteCarloConfig {
    pub fn with_trials(trials: u32) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Scalars recorded from one trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub total_revenue: f64,
    /// COGS + OpEx over the horizon
    pub total_cost: f64,
    pub npv: f64,
}

/// Summary plus the raw per-trial outcomes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub summary: SummaryStats,
    pub trials: Vec<TrialOutcome>,
    /// Base seed keying every trial; each trial reads its own ChaCha stream
    pub seed: u64,
}

impl SimulationResult {
    pub fn revenue_totals(&self) -> Vec<f64> {
        self.trials.iter().map(|t| t.total_revenue).collect()
    }

    pub fn cost_totals(&self) -> Vec<f64> {
        self.trials.iter().map(|t| t.total_cost).collect()
    }

    pub fn npv_totals(&self) -> Vec<f64> {
        self.trials.iter().map(|t| t.npv).collect()
    }
}

/// Runs Monte Carlo trials for one set of assumptions
#[derive(Debug, Clone)]
pub struct MonteCarloEngine {
    assumptions: Assumptions,
    config: MonteCarloConfig,
    sampler: Normal<f64>,
}

impl MonteCarloEngine {
    /// Validate inputs and build the revenue sampler
    pub fn new(assumptions: Assumptions, config: MonteCarloConfig) -> Result<Self> {
        if config.trials < 1 {
            return Err(ModelError::invalid("trials", "at least one trial is required"));
        }
        if !config.revenue_volatility.is_finite() || config.revenue_volatility < 0.0 {
            return Err(ModelError::invalid(
                "revenue_volatility",
                format!("{} is not a non-negative number", config.revenue_volatility),
            ));
        }
        assumptions.validate()?;

        // Zero mean gives a zero std-dev, i.e. a point mass at zero
        let mean = assumptions.new_logo_revenue();
        let std_dev = mean * config.revenue_volatility;
        let sampler = Normal::new(mean, std_dev).map_err(|e| {
            ModelError::invalid("new_logo_revenue", format!("cannot sample around {mean}: {e}"))
        })?;

        Ok(Self {
            assumptions,
            config,
            sampler,
        })
    }

    /// Run every trial and summarise
    pub fn run(&self) -> SimulationResult {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let baseline = RevenueSchedule::baseline(&self.assumptions);
        let start = Instant::now();

        log::info!(
            "Running {} Monte Carlo trials (seed={}, parallel={})",
            self.config.trials,
            seed,
            self.config.parallel
        );

        let trials: Vec<TrialOutcome> = if self.config.parallel {
            (0..self.config.trials)
                .into_par_iter()
                .map(|trial| self.run_trial(&baseline, seed, trial))
                .collect()
        } else {
            (0..self.config.trials)
                .map(|trial| self.run_trial(&baseline, seed, trial))
                .collect()
        };

        let revenue: Vec<f64> = trials.iter().map(|t| t.total_revenue).collect();
        let cost: Vec<f64> = trials.iter().map(|t| t.total_cost).collect();
        let npv: Vec<f64> = trials.iter().map(|t| t.npv).collect();
        let summary = SummaryStats::from_trials(&revenue, &cost, &npv);

        log::info!(
            "Monte Carlo complete in {:?}: mean NPV={:.2}, 95% CI=[{:.2}, {:.2}]",
            start.elapsed(),
            summary.mean_npv,
            summary.npv_ci_low,
            summary.npv_ci_high
        );

        SimulationResult {
            summary,
            trials,
            seed,
        }
    }

    fn run_trial(&self, baseline: &RevenueSchedule, base_seed: u64, trial: u32) -> TrialOutcome {
        // One key per run, one ChaCha stream per trial
        let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
        rng.set_stream(trial as u64);
        let new_logo: Vec<f64> = (0..baseline.len())
            .map(|_| self.sampler.sample(&mut rng))
            .collect();

        let statement = derive_statement(&self.assumptions, &baseline.with_new_logo(new_logo));
        TrialOutcome {
            total_revenue: statement.total_revenue(),
            total_cost: statement.total_costs(),
            npv: statement.total_npv(),
        }
    }
}

/// Simulate with default settings and return the summary only
pub fn simulate(assumptions: &Assumptions, trial_count: u32) -> Result<SummaryStats> {
    let engine = MonteCarloEngine::new(assumptions.clone(), MonteCarloConfig::with_trials(trial_count))?;
    Ok(engine.run().summary)
}
