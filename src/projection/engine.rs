//! Deterministic projection engine

use super::{derive_statement, MonthlyStatement, RevenueSchedule};
use crate::assumptions::Assumptions;
use crate::error::Result;

/// Projects the monthly statement for one set of assumptions
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    /// Create an engine, rejecting assumptions that cannot be evaluated
    pub fn new(assumptions: Assumptions) -> Result<Self> {
        assumptions.validate()?;
        Ok(Self { assumptions })
    }

    /// Baseline revenue columns (steps 1-4 of the projection)
    pub fn revenue_schedule(&self) -> RevenueSchedule {
        RevenueSchedule::baseline(&self.assumptions)
    }

    /// Run the full projection
    pub fn evaluate(&self) -> MonthlyStatement {
        let schedule = self.revenue_schedule();
        let statement = derive_statement(&self.assumptions, &schedule);
        log::debug!(
            "Projected {} months: revenue={:.2} npv={:.2}",
            statement.len(),
            statement.total_revenue(),
            statement.total_npv()
        );
        statement
    }
}

/// Validate and project in one call
pub fn evaluate(assumptions: &Assumptions) -> Result<MonthlyStatement> {
    Ok(ProjectionEngine::new(assumptions.clone())?.evaluate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_scenario() {
        let statement = evaluate(&Assumptions::default()).expect("valid assumptions");

        assert_eq!(statement.len(), 48);
        let row = statement.month(1).expect("month 1");
        assert_relative_eq!(row.new_logo_revenue, 6250.0);
        assert_relative_eq!(statement.month(11).expect("month 11").retained_revenue, 100_000.0);
        assert_relative_eq!(statement.month(12).expect("month 12").retained_revenue, 90_000.0);
    }

    #[test]
    fn test_deterministic() {
        let assumptions = Assumptions::default();
        let a = evaluate(&assumptions).expect("valid");
        let b = evaluate(&assumptions).expect("valid");

        // Bit-identical, not just approximately equal
        assert_eq!(a, b);
        for (x, y) in a.rows.iter().zip(&b.rows) {
            assert_eq!(x.npv_contribution.to_bits(), y.npv_contribution.to_bits());
        }
    }

    #[test]
    fn test_horizon_length() {
        for horizon in [1u32, 2, 12, 47, 48, 120] {
            let assumptions = Assumptions {
                horizon_months: horizon,
                ..Default::default()
            };
            let statement = evaluate(&assumptions).expect("valid");
            assert_eq!(statement.len(), horizon as usize);
            assert_eq!(statement.rows.first().map(|r| r.month), Some(1));
            assert_eq!(statement.rows.last().map(|r| r.month), Some(horizon));
        }
    }

    #[test]
    fn test_churn_boundary() {
        for k in 2..=48u32 {
            let mut assumptions = Assumptions::default();
            assumptions.retention.churn_impact_month = k;
            let statement = evaluate(&assumptions).expect("valid");

            let base = assumptions.retention.initial_retained_revenue();
            let before = statement.month(k - 1).expect("before");
            let at = statement.month(k).expect("at");
            assert_eq!(before.retained_revenue, base);
            assert_eq!(at.retained_revenue, base * 0.9);
        }
    }

    #[test]
    fn test_cumulative_monotonic() {
        let statement = evaluate(&Assumptions::default()).expect("valid");
        for pair in statement.rows.windows(2) {
            assert!(pair[1].cumulative_recurring_revenue >= pair[0].cumulative_recurring_revenue);
        }
    }

    #[test]
    fn test_discount_factor_decay() {
        let statement = evaluate(&Assumptions::default()).expect("valid");
        for pair in statement.rows.windows(2) {
            assert!(pair[1].discount_factor < pair[0].discount_factor);
        }

        let mut flat = Assumptions::default();
        flat.financing.annual_wacc = 0.0;
        let statement = evaluate(&flat).expect("valid");
        assert!(statement.rows.iter().all(|r| r.discount_factor == 1.0));
        assert!(statement
            .rows
            .iter()
            .all(|r| r.npv_contribution == r.net_income));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let assumptions = Assumptions {
            horizon_months: 0,
            ..Default::default()
        };
        assert!(ProjectionEngine::new(assumptions).unwrap_err().is_invalid_parameter());
    }
}
