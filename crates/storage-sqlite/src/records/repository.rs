use std::sync::Arc;

use diesel::prelude::*;
use log::debug;

use super::model::{GrowthPointDB, NewSavingsRecordDB, SavingsRecordDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::savings_records;
use crate::schema::savings_records::dsl::*;
use savings_tracker_core::errors::Result;
use savings_tracker_core::records::{
    GrowthPoint, NewSavingsRecord, RecordRepositoryTrait, SavingsRecord,
};

/// The record store. Every mutating call commits durably before returning;
/// each call is its own atomic unit.
pub struct RecordRepository {
    pool: Arc<DbPool>,
}

impl RecordRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        RecordRepository { pool }
    }
}

impl RecordRepositoryTrait for RecordRepository {
    fn insert(&self, new_record: NewSavingsRecord) -> Result<SavingsRecord> {
        let mut conn = get_connection(&self.pool)?;
        let new_record_db = NewSavingsRecordDB::from(new_record);

        let result_db = diesel::insert_into(savings_records::table)
            .values(&new_record_db)
            .returning(SavingsRecordDB::as_returning())
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(SavingsRecord::from(result_db))
    }

    // Descending TEXT comparison, so this is calendar order only for
    // zero-padded ISO dates.
    fn list_all(&self) -> Result<Vec<SavingsRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let records_db = savings_records
            .order(date.desc())
            .load::<SavingsRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        debug!("Loaded {} savings records", records_db.len());
        Ok(records_db.into_iter().map(SavingsRecord::from).collect())
    }

    fn delete(&self, record_id: i32) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let removed = diesel::delete(savings_records.find(record_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(removed)
    }

    fn list_for_chart(&self) -> Result<Vec<GrowthPoint>> {
        let mut conn = get_connection(&self.pool)?;
        let points_db = savings_records
            .select((
                date,
                total,
                total_gold,
                dollars_in_egp,
                investments,
                bank_certificates,
                cash_savings,
            ))
            .order(date.asc())
            .load::<GrowthPointDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(points_db.into_iter().map(GrowthPoint::from).collect())
    }
}
