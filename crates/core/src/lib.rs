//! Savings Tracker Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the savings tracker:
//! the totals calculator, the record store contract and the view projections
//! consumed by the history table and the growth chart. It is
//! database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate.

pub mod chart;
pub mod constants;
pub mod errors;
pub mod form;
pub mod history;
pub mod records;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
