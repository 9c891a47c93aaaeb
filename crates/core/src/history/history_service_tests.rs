//! Unit tests for the history view service.

use std::sync::Arc;

use crate::errors::Result;
use crate::history::HistoryService;
use crate::records::{GrowthPoint, NewSavingsRecord, RecordRepositoryTrait, SavingsRecord};

struct MockRecordRepository {
    records: Vec<SavingsRecord>,
}

impl RecordRepositoryTrait for MockRecordRepository {
    fn insert(&self, _new_record: NewSavingsRecord) -> Result<SavingsRecord> {
        unimplemented!("Not needed for tests")
    }

    fn list_all(&self) -> Result<Vec<SavingsRecord>> {
        Ok(self.records.clone())
    }

    fn delete(&self, _record_id: i32) -> Result<usize> {
        unimplemented!("Not needed for tests")
    }

    fn list_for_chart(&self) -> Result<Vec<GrowthPoint>> {
        unimplemented!("Not needed for tests")
    }
}

fn record(id: i32, date: &str) -> SavingsRecord {
    SavingsRecord {
        id,
        date: date.to_string(),
        gold_in_coins: 10.0,
        gold_conversion_value: 3500.0,
        total_gold: 35000.0,
        investments: 5000.0,
        bank_certificates: 2000.0,
        dollars_in_usd: 100.0,
        dollar_conversion_value: 31.0,
        dollars_in_egp: 3100.0,
        cash_savings: 1000.0,
        total: 46100.0,
    }
}

#[test]
fn rows_are_formatted_for_display() {
    let repository = Arc::new(MockRecordRepository {
        records: vec![record(7, "2024-03-01")],
    });
    let service = HistoryService::new(repository);

    let rows = service.get_history().unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.id, 7);
    assert_eq!(row.date, "2024-03-01");
    assert_eq!(row.total_gold, "35,000");
    assert_eq!(row.dollars_in_egp, "3,100");
    assert_eq!(row.investments, "5,000");
    assert_eq!(row.bank_certificates, "2,000");
    assert_eq!(row.cash_savings, "1,000");
    assert_eq!(row.total, "46,100");
}

#[test]
fn rows_keep_the_repository_order() {
    let repository = Arc::new(MockRecordRepository {
        records: vec![record(2, "2024-03-01"), record(1, "2024-01-01")],
    });
    let service = HistoryService::new(repository);

    let rows = service.get_history().unwrap();
    assert_eq!(rows[0].date, "2024-03-01");
    assert_eq!(rows[1].date, "2024-01-01");
}

#[test]
fn rows_serialize_in_camel_case() {
    let repository = Arc::new(MockRecordRepository {
        records: vec![record(1, "2024-01-01")],
    });
    let service = HistoryService::new(repository);

    let rows = service.get_history().unwrap();
    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(json["bankCertificates"], "2,000");
    assert_eq!(json["totalGold"], "35,000");
}
