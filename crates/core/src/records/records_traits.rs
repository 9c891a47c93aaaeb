use crate::errors::Result;
use crate::records::records_model::{GrowthPoint, NewSavingsRecord, RecordInput, SavingsRecord};

/// Trait for record store operations.
///
/// Ordering on both listing operations is lexicographic on the stored date
/// string (the storage collation), which matches calendar order only for
/// zero-padded ISO dates.
pub trait RecordRepositoryTrait: Send + Sync {
    /// Inserts one record and returns it with its generated id. The row is
    /// durably committed before this returns.
    fn insert(&self, new_record: NewSavingsRecord) -> Result<SavingsRecord>;

    /// Returns all records, newest date first.
    fn list_all(&self) -> Result<Vec<SavingsRecord>>;

    /// Deletes the record with the given id and returns the number of rows
    /// removed. An absent id removes zero rows and is not an error.
    fn delete(&self, record_id: i32) -> Result<usize>;

    /// Returns the chart projection of every record, oldest date first.
    fn list_for_chart(&self) -> Result<Vec<GrowthPoint>>;
}

/// Trait for record service operations.
pub trait RecordServiceTrait: Send + Sync {
    fn create_record(&self, input: RecordInput) -> Result<SavingsRecord>;
    fn get_records(&self) -> Result<Vec<SavingsRecord>>;
    fn delete_record(&self, record_id: i32) -> Result<usize>;
    fn get_growth_points(&self) -> Result<Vec<GrowthPoint>>;
}
