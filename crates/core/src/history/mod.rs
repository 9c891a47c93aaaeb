//! History view module - the rows rendered by the history table.

mod history_model;
mod history_service;

pub use history_model::HistoryRow;
pub use history_service::HistoryService;

#[cfg(test)]
mod history_service_tests;
