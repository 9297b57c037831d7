//! Monthly statement rows and the shared derivation from revenue

use super::RevenueSchedule;
use crate::assumptions::Assumptions;
use serde::{Deserialize, Serialize};

/// Single month of the projected statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    /// 1-indexed projection month
    pub month: u32,

    // Revenue
    pub new_logo_revenue: f64,
    pub upsell_revenue: f64,
    pub retained_revenue: f64,
    pub cumulative_recurring_revenue: f64,
    pub total_revenue: f64,

    // Costs
    pub cogs: f64,
    /// Variable OpEx plus squad cost during development
    pub opex: f64,

    // Profitability
    pub ebit: f64,
    pub tax: f64,
    pub net_income: f64,

    // Discounting
    pub discount_factor: f64,
    pub npv_contribution: f64,
}

impl StatementRow {
    /// COGS + OpEx
    pub fn total_costs(&self) -> f64 {
        self.cogs + self.opex
    }
}

/// Full projection, one row per month of the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStatement {
    pub rows: Vec<StatementRow>,
}

impl MonthlyStatement {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a 1-indexed month
    pub fn month(&self, month: u32) -> Option<&StatementRow> {
        (month as usize)
            .checked_sub(1)
            .and_then(|idx| self.rows.get(idx))
    }

    pub fn total_revenue(&self) -> f64 {
        self.rows.iter().map(|r| r.total_revenue).sum()
    }

    pub fn total_costs(&self) -> f64 {
        self.rows.iter().map(StatementRow::total_costs).sum()
    }

    pub fn total_npv(&self) -> f64 {
        self.rows.iter().map(|r| r.npv_contribution).sum()
    }

    /// Running NPV of net income, month by month
    pub fn cumulative_npv(&self) -> Vec<f64> {
        self.rows
            .iter()
            .scan(0.0, |acc, r| {
                *acc += r.npv_contribution;
                Some(*acc)
            })
            .collect()
    }

    pub fn totals(&self) -> ProjectionTotals {
        ProjectionTotals {
            total_revenue: self.total_revenue(),
            total_costs: self.total_costs(),
            total_npv: self.total_npv(),
        }
    }
}

/// Headline aggregates of a statement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionTotals {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_npv: f64,
}

/// Derive costs, profit and NPV from a revenue schedule
///
/// This is the only place the cost and discounting formulas live; the
/// baseline projection and every Monte Carlo trial go through it.
/// COGS and OpEx ratios apply to total revenue, not recurring revenue.
pub fn derive_statement(assumptions: &Assumptions, schedule: &RevenueSchedule) -> MonthlyStatement {
    let cogs_ratio = assumptions.cogs.total();
    let opex_ratio = assumptions.opex.total();
    let financing = &assumptions.financing;

    let rows = (1..=schedule.len() as u32)
        .map(|month| {
            let idx = (month - 1) as usize;
            let new_logo_revenue = schedule.new_logo[idx];
            let cumulative_recurring_revenue = schedule.cumulative_recurring[idx];
            let total_revenue = new_logo_revenue + cumulative_recurring_revenue;

            let cogs = total_revenue * cogs_ratio;
            let opex = total_revenue * opex_ratio + assumptions.squad.for_month(month);
            let ebit = total_revenue - cogs - opex;
            let tax = financing.tax(ebit);
            let net_income = ebit - tax;
            let discount_factor = financing.discount_factor(month);

            StatementRow {
                month,
                new_logo_revenue,
                upsell_revenue: schedule.upsell[idx],
                retained_revenue: schedule.retained[idx],
                cumulative_recurring_revenue,
                total_revenue,
                cogs,
                opex,
                ebit,
                tax,
                net_income,
                discount_factor,
                npv_contribution: net_income * discount_factor,
            }
        })
        .collect();

    MonthlyStatement { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_month() {
        let assumptions = Assumptions::default();
        let statement = derive_statement(&assumptions, &RevenueSchedule::baseline(&assumptions));
        let row = statement.month(1).expect("month 1");

        // 6,250 new logo + 100,000 retained + 5,000 upsell
        assert_relative_eq!(row.total_revenue, 111_250.0);
        assert_relative_eq!(row.cogs, 111_250.0 * 0.30, max_relative = 1e-12);
        assert_relative_eq!(row.opex, 111_250.0 * 0.37 + 15_000.0, max_relative = 1e-12);
        assert_relative_eq!(row.ebit, row.total_revenue - row.cogs - row.opex);
        assert_relative_eq!(row.tax, row.ebit * 0.25);
        assert_relative_eq!(row.net_income, row.ebit * 0.75, max_relative = 1e-12);
        assert_relative_eq!(row.npv_contribution, row.net_income / (1.0 + 0.10 / 12.0), max_relative = 1e-12);
    }

    #[test]
    fn test_squad_cost_stops_after_development() {
        let assumptions = Assumptions::default();
        let statement = derive_statement(&assumptions, &RevenueSchedule::baseline(&assumptions));

        let dev = statement.month(12).expect("month 12");
        let post = statement.month(13).expect("month 13");
        assert_relative_eq!(dev.opex - dev.total_revenue * 0.37, 15_000.0, max_relative = 1e-9);
        assert_relative_eq!(post.opex, post.total_revenue * 0.37, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_ebit_gives_tax_benefit() {
        let mut assumptions = Assumptions::default();
        assumptions.squad.monthly_cost = 1_000_000.0;
        let statement = derive_statement(&assumptions, &RevenueSchedule::baseline(&assumptions));
        let row = statement.month(1).expect("month 1");

        assert!(row.ebit < 0.0);
        assert!(row.tax < 0.0);
        assert_relative_eq!(row.net_income, row.ebit * 0.75, max_relative = 1e-12);
    }

    #[test]
    fn test_aggregates() {
        let assumptions = Assumptions::default();
        let statement = derive_statement(&assumptions, &RevenueSchedule::baseline(&assumptions));

        let cumulative = statement.cumulative_npv();
        assert_eq!(cumulative.len(), 48);
        assert_relative_eq!(cumulative[47], statement.total_npv(), max_relative = 1e-12);

        let totals = statement.totals();
        let costs: f64 = statement.rows.iter().map(|r| r.cogs).sum::<f64>()
            + statement.rows.iter().map(|r| r.opex).sum::<f64>();
        assert_relative_eq!(totals.total_costs, costs, max_relative = 1e-12);
        assert!(statement.month(0).is_none());
        assert!(statement.month(49).is_none());
    }
}
