use std::sync::Arc;

use log::debug;

use super::records_model::{GrowthPoint, NewSavingsRecord, RecordInput, SavingsRecord};
use super::records_traits::{RecordRepositoryTrait, RecordServiceTrait};
use super::totals_calculator::calculate_totals;
use crate::errors::{Result, ValidationError};

/// Service in front of the record store: validates and completes entry-form
/// input before it is persisted.
pub struct RecordService {
    record_repository: Arc<dyn RecordRepositoryTrait>,
}

impl RecordService {
    pub fn new(record_repository: Arc<dyn RecordRepositoryTrait>) -> Self {
        RecordService { record_repository }
    }
}

impl RecordServiceTrait for RecordService {
    /// Validates the entry input, derives the stored totals and inserts one
    /// record. Nothing is written when the date is missing or any numeric
    /// field fails to parse.
    fn create_record(&self, input: RecordInput) -> Result<SavingsRecord> {
        if input.date.is_empty() {
            return Err(ValidationError::MissingField("date".to_string()).into());
        }
        let amounts = input.amounts()?;
        let totals = calculate_totals(&amounts);
        let record = self
            .record_repository
            .insert(NewSavingsRecord::from_amounts(input.date, &amounts, &totals))?;
        debug!("Saved savings record {} ({})", record.id, record.date);
        Ok(record)
    }

    fn get_records(&self) -> Result<Vec<SavingsRecord>> {
        self.record_repository.list_all()
    }

    /// Deleting an id that is no longer present is a no-op, so a stale
    /// selection in the history view cannot fail.
    fn delete_record(&self, record_id: i32) -> Result<usize> {
        let removed = self.record_repository.delete(record_id)?;
        if removed == 0 {
            debug!("Delete of record {} removed no rows", record_id);
        }
        Ok(removed)
    }

    fn get_growth_points(&self) -> Result<Vec<GrowthPoint>> {
        self.record_repository.list_for_chart()
    }
}
