//! Database connection management.
//!
//! The application is strictly sequential, so the pool is capped at a single
//! connection: opened once at startup, reused for every operation and
//! released when the pool is dropped at shutdown.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::debug;

use crate::errors::StorageError;
use savings_tracker_core::constants::DB_FILENAME;
use savings_tracker_core::errors::Result;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Returns the database file path inside the host-supplied data directory.
pub fn get_db_path(app_data_dir: &str) -> String {
    Path::new(app_data_dir)
        .join(DB_FILENAME)
        .to_string_lossy()
        .to_string()
}

/// Creates the database file if needed and brings the schema up to date.
/// The table is created if absent and never altered afterwards.
pub fn init(db_path: &str) -> Result<()> {
    if !Path::new(db_path).exists() {
        create_db_file(db_path)?;
    }
    run_migrations(db_path)
}

/// Opens the process-scoped connection pool.
pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(StorageError::PoolError)?;
    Ok(Arc::new(pool))
}

/// Checks out the connection from the pool.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    Ok(pool.get().map_err(StorageError::PoolError)?)
}

fn establish_connection(db_path: &str) -> Result<SqliteConnection> {
    Ok(SqliteConnection::establish(db_path).map_err(StorageError::ConnectionFailed)?)
}

fn run_migrations(db_path: &str) -> Result<()> {
    let mut connection = establish_connection(db_path)?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;
    debug!("Applied {} pending migrations", applied.len());
    Ok(())
}

fn create_db_file(db_path: &str) -> Result<()> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.exists() {
            fs::create_dir_all(db_dir).map_err(StorageError::from)?;
        }
    }
    fs::File::create(db_path).map_err(StorageError::from)?;
    Ok(())
}
