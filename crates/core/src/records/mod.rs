//! Savings records module - domain models, services, and traits.

mod records_model;
mod records_service;
mod records_traits;
mod totals_calculator;

pub use records_model::{GrowthPoint, NewSavingsRecord, RecordAmounts, RecordInput, SavingsRecord};
pub use records_service::RecordService;
pub use records_traits::{RecordRepositoryTrait, RecordServiceTrait};
pub use totals_calculator::{calculate_totals, ComputedTotals};

#[cfg(test)]
mod totals_calculator_tests;
