//! Error types for the graph-store crate.
//!
//! Two separate taxonomies live here:
//! - `StoreError`: a backend failed to answer a query. Callers decide whether
//!   to retry or degrade; the store itself never retries.
//! - `DatasetError`: a dataset file could not be loaded or failed validation.
//!   Load-time only, never raised during scoring.
//!
//! Absence of data is NOT an error in either taxonomy: queries against
//! missing nodes or relations answer with empty results.

use thiserror::Error;

/// Errors raised by a `GraphStore` backend while answering a query.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not be reached or did not answer
    #[error("graph store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The backend answered but the query could not be completed
    #[error("graph query failed: {reason}")]
    QueryFailed { reason: String },
}

/// Convenience alias for query results in this crate
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while loading and validating a dataset file
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not valid dataset JSON
    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A data field had an invalid value
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Referenced entity doesn't exist (e.g., rating for an unknown movie)
    #[error("missing reference: {entity} \"{key}\"")]
    MissingReference { entity: String, key: String },
}

/// Convenience alias for dataset-loading results
pub type DatasetResult<T> = std::result::Result<T, DatasetError>;
