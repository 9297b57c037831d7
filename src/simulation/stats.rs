//! Summary statistics over Monte Carlo trial outcomes

use serde::{Deserialize, Serialize};

/// Aggregate results of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub mean_total_revenue: f64,
    pub mean_total_cost: f64,
    pub mean_npv: f64,
    /// 2.5th percentile of trial NPVs
    pub npv_ci_low: f64,
    /// 97.5th percentile of trial NPVs
    pub npv_ci_high: f64,
}

/// Arithmetic mean; 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Empirical percentile with linear interpolation between order statistics
///
/// `p` is in percent. The rank is `p/100 × (n - 1)` over the sorted sample.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0).clamp(0.0, 1.0) * (n as f64 - 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let w = rank - lower as f64;
        sorted[lower] * (1.0 - w) + sorted[upper] * w
    }
}

impl SummaryStats {
    /// Summarise per-trial revenue, cost and NPV totals
    pub fn from_trials(revenue: &[f64], cost: &[f64], npv: &[f64]) -> Self {
        Self {
            mean_total_revenue: mean(revenue),
            mean_total_cost: mean(cost),
            mean_npv: mean(npv),
            npv_ci_low: percentile(npv, 2.5),
            npv_ci_high: percentile(npv, 97.5),
        }
    }
}
