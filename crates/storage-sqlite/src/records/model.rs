//! Database models for savings records.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use savings_tracker_core::records::{GrowthPoint, NewSavingsRecord, SavingsRecord};

/// Database model for savings records.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::savings_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SavingsRecordDB {
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

/// Database model for inserting a new savings record. The id is generated by
/// the store (AUTOINCREMENT), so it is absent here.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::savings_records)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsRecordDB {
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

/// Chart projection row: the snapshot date plus the plotted amounts.
#[derive(Queryable, PartialEq, Debug, Clone)]
pub struct GrowthPointDB {
    pub date: String,
    pub total: f64,
    pub total_gold: f64,
    pub dollars_in_egp: f64,
    pub investments: f64,
    pub bank_certificates: f64,
    pub cash_savings: f64,
}

// Conversion to domain models
impl From<SavingsRecordDB> for SavingsRecord {
    fn from(db: SavingsRecordDB) -> Self {
        Self {
            id: db.id,
            date: db.date,
            gold_in_coins: db.gold_in_coins,
            gold_conversion_value: db.gold_conversion_value,
            total_gold: db.total_gold,
            investments: db.investments,
            bank_certificates: db.bank_certificates,
            dollars_in_usd: db.dollars_in_usd,
            dollar_conversion_value: db.dollar_conversion_value,
            dollars_in_egp: db.dollars_in_egp,
            cash_savings: db.cash_savings,
            total: db.total,
        }
    }
}

impl From<NewSavingsRecord> for NewSavingsRecordDB {
    fn from(domain: NewSavingsRecord) -> Self {
        Self {
            date: domain.date,
            gold_in_coins: domain.gold_in_coins,
            gold_conversion_value: domain.gold_conversion_value,
            total_gold: domain.total_gold,
            investments: domain.investments,
            bank_certificates: domain.bank_certificates,
            dollars_in_usd: domain.dollars_in_usd,
            dollar_conversion_value: domain.dollar_conversion_value,
            dollars_in_egp: domain.dollars_in_egp,
            cash_savings: domain.cash_savings,
            total: domain.total,
        }
    }
}

impl From<GrowthPointDB> for GrowthPoint {
    fn from(db: GrowthPointDB) -> Self {
        Self {
            date: db.date,
            total: db.total,
            total_gold: db.total_gold,
            dollars_in_egp: db.dollars_in_egp,
            investments: db.investments,
            bank_certificates: db.bank_certificates,
            cash_savings: db.cash_savings,
        }
    }
}
