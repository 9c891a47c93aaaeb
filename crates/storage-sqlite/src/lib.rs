//! SQLite storage implementation for the savings tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `savings-tracker-core` and contains:
//! - Database connection management (one process-scoped connection)
//! - Embedded migrations
//! - The record-store repository implementation
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The core crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!    storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod records;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, get_db_path, init, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from savings-tracker-core for convenience
pub use savings_tracker_core::errors::{DatabaseError, Error, Result};
