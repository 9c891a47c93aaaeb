//! History view service implementation.

use std::sync::Arc;

use super::history_model::HistoryRow;
use crate::errors::Result;
use crate::records::RecordRepositoryTrait;

/// Builds the rows for the history table, newest snapshot first.
pub struct HistoryService {
    record_repository: Arc<dyn RecordRepositoryTrait>,
}

impl HistoryService {
    pub fn new(record_repository: Arc<dyn RecordRepositoryTrait>) -> Self {
        HistoryService { record_repository }
    }

    pub fn get_history(&self) -> Result<Vec<HistoryRow>> {
        let records = self.record_repository.list_all()?;
        Ok(records.into_iter().map(HistoryRow::from).collect())
    }
}
