//! Unified error types for the seeder.
//!
//! Configuration problems are detected before anything is written; sink
//! failures (files, database) bubble up unchanged so the caller can decide
//! what to report.

use chrono::NaiveDate;
use thiserror::Error;

/// Every failure the generator or its exporters can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration could not be read, parsed, or failed validation.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// A monetary amount was negative, zero where a positive value is required, or not finite.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: f64,
    },

    /// The end of the generation window lies before its start.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        /// First day of the window
        start: NaiveDate,
        /// Last day of the window
        end: NaiveDate,
    },

    /// The catalog has nothing to sell, or nothing with a positive price.
    #[error("Catalog is empty or has no item with a positive price")]
    EmptyCatalog,

    /// Writing an output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a CSV record failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The database sink rejected a statement or could not connect.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A SQL statement could not be built.
    #[error("Query build error: {0}")]
    Query(#[from] sea_orm::sea_query::error::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for a [`Error::Config`] with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
