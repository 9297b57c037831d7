//! Cost ratios, fixed squad cost, tax and discounting

use serde::{Deserialize, Serialize};

/// Cost of goods sold, each as a fraction of total revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CogsRatios {
    pub hosting_pct: f64,
    pub professional_services_pct: f64,
    pub customer_support_pct: f64,
    pub customer_success_pct: f64,
}

impl Default for CogsRatios {
    fn default() -> Self {
        Self {
            hosting_pct: 0.05,
            professional_services_pct: 0.10,
            customer_support_pct: 0.08,
            customer_success_pct: 0.07,
        }
    }
}

impl CogsRatios {
    /// Combined COGS ratio
    pub fn total(&self) -> f64 {
        self.hosting_pct
            + self.professional_services_pct
            + self.customer_support_pct
            + self.customer_success_pct
    }
}

/// Variable operating expenses, each as a fraction of total revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpexRatios {
    /// Marketing customer acquisition cost
    pub marketing_cac_pct: f64,
    pub sales_commission_pct: f64,
    /// Support and maintenance
    pub support_maintenance_pct: f64,
}

impl Default for OpexRatios {
    fn default() -> Self {
        Self {
            marketing_cac_pct: 0.15,
            sales_commission_pct: 0.12,
            support_maintenance_pct: 0.10,
        }
    }
}

impl OpexRatios {
    /// Combined variable OpEx ratio
    pub fn total(&self) -> f64 {
        self.marketing_cac_pct + self.sales_commission_pct + self.support_maintenance_pct
    }
}

/// Fixed monthly cost of the integration squad during development
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadCost {
    /// Monthly squad cost ($)
    pub monthly_cost: f64,
    /// Length of the development window in months
    pub development_months: u32,
}

impl Default for SquadCost {
    fn default() -> Self {
        Self {
            monthly_cost: 15_000.0,
            development_months: 12,
        }
    }
}

impl SquadCost {
    /// Squad cost charged in a 1-indexed month
    /// Applies while month <= development_months
    pub fn for_month(&self, month: u32) -> f64 {
        if month <= self.development_months {
            self.monthly_cost
        } else {
            0.0
        }
    }
}

/// Tax and discount rate assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancingAssumptions {
    /// Tax rate as a fraction of EBIT
    pub tax_rate: f64,
    /// Annual WACC used as the discount rate
    pub annual_wacc: f64,
}

impl Default for FinancingAssumptions {
    fn default() -> Self {
        Self {
            tax_rate: 0.25,
            annual_wacc: 0.10,
        }
    }
}

impl FinancingAssumptions {
    /// Monthly discount rate (annual / 12, not compounded)
    pub fn monthly_wacc(&self) -> f64 {
        self.annual_wacc / 12.0
    }

    /// Discount factor for a 1-indexed month: 1 / (1 + r)^m
    pub fn discount_factor(&self, month: u32) -> f64 {
        1.0 / (1.0 + self.monthly_wacc()).powi(month as i32)
    }

    /// Tax on EBIT. Not floored: negative EBIT gives a tax benefit.
    pub fn tax(&self, ebit: f64) -> f64 {
        ebit * self.tax_rate
    }
}
