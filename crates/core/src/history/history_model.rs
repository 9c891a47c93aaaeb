//! History view models.

use serde::{Deserialize, Serialize};

use crate::records::SavingsRecord;
use crate::utils::format_utils::format_grouped;

/// One row of the history table: the snapshot date plus the six amounts
/// formatted for display. The record id is carried along (but not displayed)
/// so the view can delete by selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub id: i32,
    pub date: String,
    pub total_gold: String,
    pub dollars_in_egp: String,
    pub investments: String,
    pub bank_certificates: String,
    pub cash_savings: String,
    pub total: String,
}

impl From<SavingsRecord> for HistoryRow {
    fn from(record: SavingsRecord) -> Self {
        HistoryRow {
            id: record.id,
            date: record.date,
            total_gold: format_grouped(record.total_gold),
            dollars_in_egp: format_grouped(record.dollars_in_egp),
            investments: format_grouped(record.investments),
            bank_certificates: format_grouped(record.bank_certificates),
            cash_savings: format_grouped(record.cash_savings),
            total: format_grouped(record.total),
        }
    }
}
