//! Error taxonomy for ranking requests.

use graph_store::StoreError;
use thiserror::Error;

/// Errors a scoring strategy can report.
///
/// An empty ranked list is a valid outcome, never an error. Any store
/// failure aborts the whole ranking request -- partial scores are never
/// returned, and no retry happens here (retry policy belongs to the adapter
/// or the caller).
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Malformed criteria (e.g., a runtime range with min > max)
    #[error("invalid criteria: {0}")]
    InvalidInput(String),

    /// The graph store failed to answer a query
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias for ranking results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
