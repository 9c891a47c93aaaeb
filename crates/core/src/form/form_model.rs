//! Entry form state and live preview.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DOLLAR_RATE, DEFAULT_GOLD_RATE};
use crate::records::{calculate_totals, ComputedTotals, RecordInput};
use crate::utils::time_utils::today_iso;

/// Live-computed totals displayed next to the entry fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsPreview {
    pub total_gold: f64,
    pub dollars_in_egp: f64,
    pub total: f64,
}

impl From<ComputedTotals> for TotalsPreview {
    fn from(totals: ComputedTotals) -> Self {
        TotalsPreview {
            total_gold: totals.total_gold,
            dollars_in_egp: totals.dollars_in_egp,
            total: totals.total,
        }
    }
}

/// State of the "Add Record" form.
///
/// The hosting framework owns the widgets and invokes
/// [`RecordForm::recalculate`] on every field change; the form only ever
/// touches its own preview, never the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordForm {
    pub date: String,
    pub gold_in_coins: String,
    pub gold_conversion_value: String,
    pub dollars_in_usd: String,
    pub dollar_conversion_value: String,
    pub investments: String,
    pub bank_certificates: String,
    pub cash_savings: String,
    pub preview: TotalsPreview,
}

impl Default for RecordForm {
    fn default() -> Self {
        RecordForm {
            date: today_iso(),
            gold_in_coins: String::new(),
            gold_conversion_value: DEFAULT_GOLD_RATE.to_string(),
            dollars_in_usd: String::new(),
            dollar_conversion_value: DEFAULT_DOLLAR_RATE.to_string(),
            investments: String::new(),
            bank_certificates: String::new(),
            cash_savings: String::new(),
            preview: TotalsPreview::default(),
        }
    }
}

impl RecordForm {
    /// Recomputes the preview from the current field values. Empty fields
    /// count as zero; a field that does not parse leaves the previously
    /// displayed preview in place while the user keeps typing.
    pub fn recalculate(&mut self) {
        if let Ok(amounts) = self.input().amounts() {
            self.preview = calculate_totals(&amounts).into();
        }
    }

    /// Empties the quantity and amount fields and resets the date to today.
    /// The conversion-rate fields keep whatever the user last entered.
    pub fn clear(&mut self) {
        self.gold_in_coins.clear();
        self.dollars_in_usd.clear();
        self.investments.clear();
        self.bank_certificates.clear();
        self.cash_savings.clear();
        self.date = today_iso();
        self.recalculate();
    }

    /// Snapshot of the raw field values, submitted to the record service on
    /// save. A failed save leaves the form state untouched.
    pub fn input(&self) -> RecordInput {
        RecordInput {
            date: self.date.clone(),
            gold_in_coins: self.gold_in_coins.clone(),
            gold_conversion_value: self.gold_conversion_value.clone(),
            dollars_in_usd: self.dollars_in_usd.clone(),
            dollar_conversion_value: self.dollar_conversion_value.clone(),
            investments: self.investments.clone(),
            bank_certificates: self.bank_certificates.clone(),
            cash_savings: self.cash_savings.clone(),
        }
    }
}
