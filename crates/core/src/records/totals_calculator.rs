//! Pure computation of the derived snapshot totals.

use super::records_model::RecordAmounts;

/// Derived totals for one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComputedTotals {
    pub total_gold: f64,
    pub dollars_in_egp: f64,
    pub total: f64,
}

/// Computes the derived totals from the raw entry amounts.
///
/// Pure and stateless. The entry form calls this on every field change for
/// the live preview and the record service calls it once more at save time,
/// so the stored values are exactly the ones the user last saw.
pub fn calculate_totals(amounts: &RecordAmounts) -> ComputedTotals {
    let total_gold = amounts.gold_in_coins * amounts.gold_conversion_value;
    let dollars_in_egp = amounts.dollars_in_usd * amounts.dollar_conversion_value;
    let total = total_gold
        + dollars_in_egp
        + amounts.investments
        + amounts.bank_certificates
        + amounts.cash_savings;

    ComputedTotals {
        total_gold,
        dollars_in_egp,
        total,
    }
}
