//! CSV export of the detailed statement table

use super::MonthlyStatement;
use crate::error::Result;
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::io::Write;

/// Flattened CSV record, values rounded to cents
#[derive(Debug, Serialize)]
struct StatementRecord {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Period", skip_serializing_if = "Option::is_none")]
    period: Option<NaiveDate>,
    #[serde(rename = "NewLogoRevenue")]
    new_logo_revenue: f64,
    #[serde(rename = "UpsellRevenue")]
    upsell_revenue: f64,
    #[serde(rename = "RetainedRevenue")]
    retained_revenue: f64,
    #[serde(rename = "CumulativeRecurring")]
    cumulative_recurring_revenue: f64,
    #[serde(rename = "TotalRevenue")]
    total_revenue: f64,
    #[serde(rename = "COGS")]
    cogs: f64,
    #[serde(rename = "OpEx")]
    opex: f64,
    #[serde(rename = "EBIT")]
    ebit: f64,
    #[serde(rename = "Tax")]
    tax: f64,
    #[serde(rename = "NetIncome")]
    net_income: f64,
    #[serde(rename = "DiscountFactor")]
    discount_factor: f64,
    #[serde(rename = "NPV")]
    npv_contribution: f64,
    #[serde(rename = "CumulativeNPV")]
    cumulative_npv: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// First day of the calendar month for a 1-indexed projection month
fn period_start(start: NaiveDate, month: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(month.saturating_sub(1)))
}

/// Write the statement as CSV
///
/// When `start_date` is given a `Period` column labels each row with its
/// calendar month, month 1 being the start date itself.
pub fn write_statement_csv<W: Write>(
    statement: &MonthlyStatement,
    start_date: Option<NaiveDate>,
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let cumulative = statement.cumulative_npv();

    for (row, cumulative_npv) in statement.rows.iter().zip(cumulative) {
        wtr.serialize(StatementRecord {
            month: row.month,
            period: start_date.and_then(|d| period_start(d, row.month)),
            new_logo_revenue: round2(row.new_logo_revenue),
            upsell_revenue: round2(row.upsell_revenue),
            retained_revenue: round2(row.retained_revenue),
            cumulative_recurring_revenue: round2(row.cumulative_recurring_revenue),
            total_revenue: round2(row.total_revenue),
            cogs: round2(row.cogs),
            opex: round2(row.opex),
            ebit: round2(row.ebit),
            tax: round2(row.tax),
            net_income: round2(row.net_income),
            // Discount factors need more than two decimals to be useful
            discount_factor: (row.discount_factor * 1e8).round() / 1e8,
            npv_contribution: round2(row.npv_contribution),
            cumulative_npv: round2(cumulative_npv),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
