//! Unit tests for the entry form state.

use crate::constants::{DEFAULT_DOLLAR_RATE, DEFAULT_GOLD_RATE};
use crate::form::RecordForm;

fn filled_form() -> RecordForm {
    // The default rates (3500 and 31) complete the 46,100 scenario.
    let mut form = RecordForm {
        gold_in_coins: "10".to_string(),
        dollars_in_usd: "100".to_string(),
        investments: "5000".to_string(),
        bank_certificates: "2000".to_string(),
        cash_savings: "1000".to_string(),
        ..RecordForm::default()
    };
    form.recalculate();
    form
}

#[test]
fn defaults_prefill_rates_and_today() {
    let form = RecordForm::default();
    assert_eq!(form.gold_conversion_value, DEFAULT_GOLD_RATE);
    assert_eq!(form.dollar_conversion_value, DEFAULT_DOLLAR_RATE);
    assert!(!form.date.is_empty());
    assert_eq!(form.preview.total, 0.0);
}

#[test]
fn recalculate_updates_the_preview() {
    let form = filled_form();
    assert_eq!(form.preview.total_gold, 35000.0);
    assert_eq!(form.preview.dollars_in_egp, 3100.0);
    assert_eq!(form.preview.total, 46100.0);
}

#[test]
fn empty_fields_count_as_zero() {
    let mut form = RecordForm::default();
    form.gold_in_coins = "2".to_string();
    form.recalculate();
    assert_eq!(form.preview.total_gold, 7000.0);
    assert_eq!(form.preview.total, 7000.0);
}

#[test]
fn invalid_field_keeps_the_previous_preview() {
    let mut form = filled_form();
    form.gold_in_coins = "abc".to_string();
    form.recalculate();
    assert_eq!(form.preview.total, 46100.0);

    // Once the field parses again the preview follows.
    form.gold_in_coins = "20".to_string();
    form.recalculate();
    assert_eq!(form.preview.total_gold, 70000.0);
}

#[test]
fn clear_keeps_the_rates() {
    let mut form = filled_form();
    form.gold_conversion_value = "4200".to_string();
    form.dollar_conversion_value = "48".to_string();
    form.clear();

    assert!(form.gold_in_coins.is_empty());
    assert!(form.dollars_in_usd.is_empty());
    assert!(form.investments.is_empty());
    assert!(form.bank_certificates.is_empty());
    assert!(form.cash_savings.is_empty());
    assert_eq!(form.gold_conversion_value, "4200");
    assert_eq!(form.dollar_conversion_value, "48");
    assert!(!form.date.is_empty());
    assert_eq!(form.preview.total, 0.0);
}

#[test]
fn input_mirrors_the_fields() {
    let form = filled_form();
    let input = form.input();
    assert_eq!(input.date, form.date);
    assert_eq!(input.gold_in_coins, "10");
    assert_eq!(input.cash_savings, "1000");
}
