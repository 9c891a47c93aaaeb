//! Unit tests for the totals calculator.

use proptest::prelude::*;

use crate::records::records_model::RecordAmounts;
use crate::records::totals_calculator::{calculate_totals, ComputedTotals};

fn amounts(g: f64, gr: f64, u: f64, ur: f64, inv: f64, cert: f64, cash: f64) -> RecordAmounts {
    RecordAmounts {
        gold_in_coins: g,
        gold_conversion_value: gr,
        dollars_in_usd: u,
        dollar_conversion_value: ur,
        investments: inv,
        bank_certificates: cert,
        cash_savings: cash,
    }
}

#[test]
fn derives_gold_usd_and_grand_total() {
    let totals = calculate_totals(&amounts(10.0, 3500.0, 100.0, 31.0, 5000.0, 2000.0, 1000.0));
    assert_eq!(
        totals,
        ComputedTotals {
            total_gold: 35000.0,
            dollars_in_egp: 3100.0,
            total: 46100.0,
        }
    );
}

#[test]
fn all_zero_amounts_give_zero_totals() {
    let totals = calculate_totals(&RecordAmounts::default());
    assert_eq!(totals, ComputedTotals::default());
}

#[test]
fn preview_and_save_agree() {
    // The same call serves the live preview and the authoritative save.
    let a = amounts(3.5, 3625.25, 250.0, 30.85, 12000.0, 0.0, 750.5);
    assert_eq!(calculate_totals(&a), calculate_totals(&a));
}

proptest! {
    #[test]
    fn derived_fields_follow_the_formulas(
        g in 0.0..1e6f64,
        gr in 0.0..1e6f64,
        u in 0.0..1e6f64,
        ur in 0.0..1e6f64,
        inv in 0.0..1e9f64,
        cert in 0.0..1e9f64,
        cash in 0.0..1e9f64,
    ) {
        let totals = calculate_totals(&amounts(g, gr, u, ur, inv, cert, cash));
        prop_assert_eq!(totals.total_gold, g * gr);
        prop_assert_eq!(totals.dollars_in_egp, u * ur);
        prop_assert_eq!(totals.total, g * gr + u * ur + inv + cert + cash);
    }

    // Integer-valued amounts stay exact in f64, so shuffling the three
    // additive entry fields must not change the grand total.
    #[test]
    fn grand_total_ignores_entry_order(
        inv in 0u32..1_000_000,
        cert in 0u32..1_000_000,
        cash in 0u32..1_000_000,
    ) {
        let entered = amounts(0.0, 0.0, 0.0, 0.0, inv as f64, cert as f64, cash as f64);
        let shuffled = amounts(0.0, 0.0, 0.0, 0.0, cash as f64, inv as f64, cert as f64);
        prop_assert_eq!(calculate_totals(&entered).total, calculate_totals(&shuffled).total);
    }
}
