//! Savings record domain models.

use serde::{Deserialize, Serialize};

use super::totals_calculator::ComputedTotals;
use crate::errors::Result;

/// Domain model representing one stored savings snapshot.
///
/// The derived fields (`total_gold`, `dollars_in_egp`, `total`) are computed
/// once at save time from the raw fields of the same record and never
/// recomputed afterwards, so historical totals stay stable even if the
/// default conversion rates change later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRecord {
    pub id: i32,
    pub date: String,
    pub gold_in_coins: f64,
    pub gold_conversion_value: f64,
    pub total_gold: f64,
    pub investments: f64,
    pub bank_certificates: f64,
    pub dollars_in_usd: f64,
    pub dollar_conversion_value: f64,
    pub dollars_in_egp: f64,
    pub cash_savings: f64,
    pub total: f64,
}

/// Raw entry-form values as submitted by the input form.
///
/// Every field is the string the user typed; parsing happens on save so a
/// failed save leaves the form untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecordInput {
    pub date: String,
    pub gold_in_coins: String,
    pub gold_conversion_value: String,
    pub dollars_in_usd: String,
    pub dollar_conversion_value: String,
    pub investments: String,
    pub bank_certificates: String,
    pub cash_savings: String,
}

impl RecordInput {
    /// Parses the seven numeric fields. An empty field counts as zero; any
    /// other non-numeric value is a validation error.
    pub fn amounts(&self) -> Result<RecordAmounts> {
        Ok(RecordAmounts {
            gold_in_coins: parse_amount(&self.gold_in_coins)?,
            gold_conversion_value: parse_amount(&self.gold_conversion_value)?,
            dollars_in_usd: parse_amount(&self.dollars_in_usd)?,
            dollar_conversion_value: parse_amount(&self.dollar_conversion_value)?,
            investments: parse_amount(&self.investments)?,
            bank_certificates: parse_amount(&self.bank_certificates)?,
            cash_savings: parse_amount(&self.cash_savings)?,
        })
    }
}

fn parse_amount(raw: &str) -> Result<f64> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    Ok(raw.trim().parse::<f64>()?)
}

/// The seven numeric entry fields after parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecordAmounts {
    pub gold_in_coins: f64,
    pub gold_conversion_value: f64,
    pub dollars_in_usd: f64,
    pub dollar_conversion_value: f64,
    pub investments: f64,
    pub bank_certificates: f64,
    pub cash_savings: f64,
}

/// Input model for inserting a new record: the raw amounts plus the derived
/// fields from the totals calculator.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsRecord {
    pub date: String,
    pub gold_in_coins: f64,
    pub gold_conversion_value: f64,
    pub total_gold: f64,
    pub investments: f64,
    pub bank_certificates: f64,
    pub dollars_in_usd: f64,
    pub dollar_conversion_value: f64,
    pub dollars_in_egp: f64,
    pub cash_savings: f64,
    pub total: f64,
}

impl NewSavingsRecord {
    /// Assembles an insertable record from the entry date, the parsed raw
    /// amounts and the totals derived from them.
    pub fn from_amounts(date: String, amounts: &RecordAmounts, totals: &ComputedTotals) -> Self {
        NewSavingsRecord {
            date,
            gold_in_coins: amounts.gold_in_coins,
            gold_conversion_value: amounts.gold_conversion_value,
            total_gold: totals.total_gold,
            investments: amounts.investments,
            bank_certificates: amounts.bank_certificates,
            dollars_in_usd: amounts.dollars_in_usd,
            dollar_conversion_value: amounts.dollar_conversion_value,
            dollars_in_egp: totals.dollars_in_egp,
            cash_savings: amounts.cash_savings,
            total: totals.total,
        }
    }
}

/// Store projection feeding the growth chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    pub date: String,
    pub total: f64,
    pub total_gold: f64,
    pub dollars_in_egp: f64,
    pub investments: f64,
    pub bank_certificates: f64,
    pub cash_savings: f64,
}
