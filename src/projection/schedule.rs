//! Monthly revenue columns feeding the statement

use crate::assumptions::Assumptions;

/// Revenue columns for every month of the horizon
///
/// Index 0 holds month 1. The recurring columns are fixed by the
/// assumptions; only `new_logo` is replaced by Monte Carlo trials.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSchedule {
    pub new_logo: Vec<f64>,
    pub upsell: Vec<f64>,
    pub retained: Vec<f64>,
    /// Running sum of retained plus running sum of upsell
    pub cumulative_recurring: Vec<f64>,
}

impl RevenueSchedule {
    /// Build the deterministic schedule from assumptions
    pub fn baseline(assumptions: &Assumptions) -> Self {
        let horizon = assumptions.horizon_months;
        let new_logo_revenue = assumptions.new_logo_revenue();

        let new_logo = vec![new_logo_revenue; horizon as usize];
        let upsell = vec![assumptions.upsell_per_month; horizon as usize];
        let retained: Vec<f64> = (1..=horizon)
            .map(|month| assumptions.retention.retained_revenue(month))
            .collect();

        let mut retained_sum = 0.0;
        let mut upsell_sum = 0.0;
        let cumulative_recurring = retained
            .iter()
            .zip(&upsell)
            .map(|(r, u)| {
                retained_sum += r;
                upsell_sum += u;
                retained_sum + upsell_sum
            })
            .collect();

        Self {
            new_logo,
            upsell,
            retained,
            cumulative_recurring,
        }
    }

    /// Copy of this schedule with a different new-logo column
    pub fn with_new_logo(&self, new_logo: Vec<f64>) -> Self {
        debug_assert_eq!(new_logo.len(), self.new_logo.len());
        Self {
            new_logo,
            ..self.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.new_logo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.new_logo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_baseline_columns() {
        let schedule = RevenueSchedule::baseline(&Assumptions::default());

        assert_eq!(schedule.len(), 48);
        assert!(schedule.new_logo.iter().all(|&v| v == 6250.0));
        assert!(schedule.upsell.iter().all(|&v| v == 5000.0));

        // Month 11 and 12 straddle the churn boundary
        assert_relative_eq!(schedule.retained[10], 100_000.0);
        assert_relative_eq!(schedule.retained[11], 90_000.0);
    }

    #[test]
    fn test_cumulative_recurring() {
        let schedule = RevenueSchedule::baseline(&Assumptions::default());

        assert_relative_eq!(schedule.cumulative_recurring[0], 105_000.0);
        assert_relative_eq!(schedule.cumulative_recurring[1], 210_000.0);
        // 11 × 100,000 + 90,000 retained, 12 × 5,000 upsell
        assert_relative_eq!(schedule.cumulative_recurring[11], 1_250_000.0);

        for pair in schedule.cumulative_recurring.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_with_new_logo_keeps_recurring() {
        let base = RevenueSchedule::baseline(&Assumptions::default());
        let trial = base.with_new_logo(vec![1.0; 48]);

        assert_eq!(trial.cumulative_recurring, base.cumulative_recurring);
        assert_eq!(trial.new_logo[0], 1.0);
    }
}
