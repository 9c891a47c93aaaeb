use std::sync::Arc;

use tempfile::TempDir;

use savings_tracker_storage_sqlite::{create_pool, get_db_path, init, DbPool};

/// Creates a fresh on-disk database in a temp directory and opens its pool.
/// The returned `TempDir` must stay alive for the duration of the test.
pub fn setup_db() -> (TempDir, Arc<DbPool>) {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = get_db_path(dir.path().to_str().unwrap());
    init(&db_path).expect("init database");
    let pool = create_pool(&db_path).expect("open pool");
    (dir, pool)
}
