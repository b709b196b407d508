//! # Recommender Crate
//!
//! The scoring and ranking core: three independent strategies that turn raw
//! relationship data into an ordered list of recommended titles with
//! explainable scores.
//!
//! ## Components
//!
//! ### Relationship Aggregator
//! Gathers neighbor multisets (genres, directors, actors, raters) from the
//! injected `GraphStore`; the only way any strategy touches the graph.
//!
//! ### Collaborative Strategy
//! "Users who liked what you liked also liked..." -- overlap-weighted
//! user-similarity scoring over rating edges.
//!
//! ### Content-Based Strategy
//! Shared genre/director/actor counting against a seed set, with a runtime
//! proximity window restricting which pairs are considered.
//!
//! ### Attribute Strategy
//! Six-component unweighted sum against explicit criteria (genres,
//! directors, actors, runtime range, languages, decades).
//!
//! All three share one ranking rule -- score descending, voters descending,
//! title ascending, cut to the requested amount -- so output is
//! deterministic for a given graph snapshot.
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{AttributeCriteria, AttributeStrategy, CollaborativeStrategy};
//! use std::sync::Arc;
//!
//! let store: Arc<dyn GraphStore> = Arc::new(graph);
//!
//! let collaborative = CollaborativeStrategy::new(store.clone());
//! let picks = collaborative.recommend(&liked_titles, 10)?;
//!
//! let attributes = AttributeStrategy::new(store.clone());
//! let criteria = AttributeCriteria::new().with_genres(["Sci-Fi"]);
//! let matches = attributes.recommend(&criteria, 10)?;
//! ```
//!
//! The strategies hold no state across calls; every request re-derives its
//! scores from the store.

// Public modules
pub mod aggregator;
pub mod attributes;
pub mod collaborative;
pub mod content;
pub mod error;
pub mod rank;
pub mod types;

// Re-export commonly used types
pub use aggregator::RelationshipAggregator;
pub use attributes::{AttributeCriteria, AttributeStrategy, RuntimeRange};
pub use collaborative::CollaborativeStrategy;
pub use content::ContentStrategy;
pub use error::{RecommendError, Result};
pub use rank::{ScoredCandidate, rank_and_cut};
pub use types::RankedMovie;

#[cfg(test)]
mod tests {
    use super::*;
    use graph_store::{GraphStore, MemoryGraph, Movie};
    use std::sync::Arc;

    fn build_test_graph() -> Arc<dyn GraphStore> {
        let mut graph = MemoryGraph::new();
        graph.insert_movie(Movie {
            title: "Inception".to_string(),
            year: 2010,
            runtime: 148,
            language: "en".to_string(),
            release_date: "2010-07-16".to_string(),
        });
        graph.link_genre("Inception", "Sci-Fi");
        graph.insert_rating("alice", "Inception", 5.0);
        Arc::new(graph)
    }

    #[test]
    fn test_strategies_can_be_created_from_one_store() {
        let store = build_test_graph();
        let _collaborative = CollaborativeStrategy::new(store.clone());
        let _content = ContentStrategy::new(store.clone());
        let _attributes = AttributeStrategy::new(store);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let store = build_test_graph();
        let collaborative = CollaborativeStrategy::new(store);
        let results = collaborative
            .recommend(&["Inception".to_string()], 10)
            .unwrap();
        // alice only rated the liked title itself
        assert!(results.is_empty());
    }
}
