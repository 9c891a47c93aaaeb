//! SQLite storage implementation for savings records.

mod model;
mod repository;

pub use model::{GrowthPointDB, NewSavingsRecordDB, SavingsRecordDB};
pub use repository::RecordRepository;
