//! Business case assumptions (the parameter set for one evaluation)

pub mod revenue;
pub mod costs;
pub mod loader;

pub use revenue::{RevenueDrivers, RetentionDrivers};
pub use costs::{CogsRatios, OpexRatios, SquadCost, FinancingAssumptions};
pub use loader::{load_assumptions, load_assumptions_from_reader};

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Projection horizon of the standard scenario (months)
pub const DEFAULT_HORIZON_MONTHS: u32 = 48;

/// Immutable inputs for one projection
///
/// Built once per evaluation and passed by reference into the engines;
/// nothing is retained between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Number of months projected
    #[serde(default = "default_horizon")]
    pub horizon_months: u32,

    #[serde(default)]
    pub revenue: RevenueDrivers,

    #[serde(default)]
    pub retention: RetentionDrivers,

    /// Recurring revenue added each month by upsell ($)
    #[serde(default = "default_upsell")]
    pub upsell_per_month: f64,

    #[serde(default)]
    pub cogs: CogsRatios,

    #[serde(default)]
    pub opex: OpexRatios,

    #[serde(default)]
    pub squad: SquadCost,

    #[serde(default)]
    pub financing: FinancingAssumptions,
}

fn default_horizon() -> u32 { DEFAULT_HORIZON_MONTHS }
fn default_upsell() -> f64 { 5_000.0 }

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            revenue: RevenueDrivers::default(),
            retention: RetentionDrivers::default(),
            upsell_per_month: default_upsell(),
            cogs: CogsRatios::default(),
            opex: OpexRatios::default(),
            squad: SquadCost::default(),
            financing: FinancingAssumptions::default(),
        }
    }
}

impl Assumptions {
    /// Constant monthly new-logo revenue for this horizon
    pub fn new_logo_revenue(&self) -> f64 {
        self.revenue.monthly_new_logo_revenue(self.horizon_months)
    }

    /// Reject parameter sets the engines cannot evaluate
    ///
    /// Only structural problems are errors: a zero horizon or a value that
    /// is not a finite number. Ranges (ratios above 1, impact months past
    /// the horizon) are left to the caller.
    pub fn validate(&self) -> Result<()> {
        if self.horizon_months == 0 {
            return Err(ModelError::invalid("horizon_months", "must be at least 1"));
        }

        let numeric: [(&'static str, f64); 17] = [
            ("revenue.total_bookings_forecast", self.revenue.total_bookings_forecast),
            ("revenue.soc_needs_pct", self.revenue.soc_needs_pct),
            ("revenue.conversion_rate", self.revenue.conversion_rate),
            ("retention.avg_mrr_per_client", self.retention.avg_mrr_per_client),
            ("retention.churn_retention_rate", self.retention.churn_retention_rate),
            ("upsell_per_month", self.upsell_per_month),
            ("cogs.hosting_pct", self.cogs.hosting_pct),
            ("cogs.professional_services_pct", self.cogs.professional_services_pct),
            ("cogs.customer_support_pct", self.cogs.customer_support_pct),
            ("cogs.customer_success_pct", self.cogs.customer_success_pct),
            ("opex.marketing_cac_pct", self.opex.marketing_cac_pct),
            ("opex.sales_commission_pct", self.opex.sales_commission_pct),
            ("opex.support_maintenance_pct", self.opex.support_maintenance_pct),
            ("squad.monthly_cost", self.squad.monthly_cost),
            ("financing.tax_rate", self.financing.tax_rate),
            ("financing.annual_wacc", self.financing.annual_wacc),
            ("new_logo_revenue", self.new_logo_revenue()),
        ];

        for (field, value) in numeric {
            if !value.is_finite() {
                return Err(ModelError::invalid(field, format!("{value} is not a finite number")));
            }
        }

        Ok(())
    }
}
