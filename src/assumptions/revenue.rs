//! Revenue drivers: new-logo bookings, retained MRR and churn

use serde::{Deserialize, Serialize};

/// Drivers of new-logo revenue
///
/// The bookings forecast is spread evenly over the horizon after applying
/// the share of bookings with a qualifying need and the conversion rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueDrivers {
    /// Total bookings forecast over the horizon ($)
    #[serde(default = "default_bookings")]
    pub total_bookings_forecast: f64,

    /// Fraction of the bookings forecast with a qualifying (SOC) need
    #[serde(default = "default_soc_needs_pct")]
    pub soc_needs_pct: f64,

    /// Conversion rate from bookings to closed revenue
    #[serde(default = "default_conversion_rate")]
    pub conversion_rate: f64,
}

fn default_bookings() -> f64 { 2_000_000.0 }
fn default_soc_needs_pct() -> f64 { 0.5 }
fn default_conversion_rate() -> f64 { 0.3 }

impl Default for RevenueDrivers {
    fn default() -> Self {
        Self {
            total_bookings_forecast: default_bookings(),
            soc_needs_pct: default_soc_needs_pct(),
            conversion_rate: default_conversion_rate(),
        }
    }
}

impl RevenueDrivers {
    /// Constant monthly new-logo revenue
    /// bookings × need fraction × conversion / horizon
    pub fn monthly_new_logo_revenue(&self, horizon_months: u32) -> f64 {
        if horizon_months == 0 {
            return 0.0;
        }
        self.total_bookings_forecast * self.soc_needs_pct * self.conversion_rate
            / horizon_months as f64
    }
}

/// Drivers of retained recurring revenue from the existing account base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionDrivers {
    /// Average MRR per client ($)
    #[serde(default = "default_avg_mrr")]
    pub avg_mrr_per_client: f64,

    /// Number of accounts in the existing base
    #[serde(default = "default_total_accounts")]
    pub total_accounts: u32,

    /// Multiplier applied to retained revenue once churn hits (0 to 1)
    #[serde(default = "default_churn_retention_rate")]
    pub churn_retention_rate: f64,

    /// First month (1-indexed) at which the churn multiplier applies
    #[serde(default = "default_churn_impact_month")]
    pub churn_impact_month: u32,
}

fn default_avg_mrr() -> f64 { 2_000.0 }
fn default_total_accounts() -> u32 { 50 }
fn default_churn_retention_rate() -> f64 { 0.9 }
fn default_churn_impact_month() -> u32 { 12 }

impl Default for RetentionDrivers {
    fn default() -> Self {
        Self {
            avg_mrr_per_client: default_avg_mrr(),
            total_accounts: default_total_accounts(),
            churn_retention_rate: default_churn_retention_rate(),
            churn_impact_month: default_churn_impact_month(),
        }
    }
}

impl RetentionDrivers {
    /// Retained revenue before churn: MRR per client × accounts
    pub fn initial_retained_revenue(&self) -> f64 {
        self.avg_mrr_per_client * self.total_accounts as f64
    }

    /// Check whether churn has hit by the given month
    /// The boundary month itself is inclusive
    pub fn churn_applies(&self, month: u32) -> bool {
        month >= self.churn_impact_month
    }

    /// Retained revenue for a 1-indexed month
    pub fn retained_revenue(&self, month: u32) -> f64 {
        let base = self.initial_retained_revenue();
        if self.churn_applies(month) {
            base * self.churn_retention_rate
        } else {
            base
        }
    }
}
