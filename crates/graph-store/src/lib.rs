//! # Graph Store Crate
//!
//! The graph data layer of the recommendation engine: the movie property
//! graph's domain types, the read-only query contract the scoring engine
//! depends on, and an in-memory implementation with a JSON dataset loader.
//!
//! ## Main Components
//!
//! - **types**: node/edge vocabulary (Label, EdgeType, Direction) and records
//! - **store**: the `GraphStore` trait -- `find_nodes` + `traverse`
//! - **memory**: `MemoryGraph`, a HashMap-backed `GraphStore`
//! - **dataset**: JSON dataset file loading and validation
//! - **error**: `StoreError` (query failures) and `DatasetError` (load time)
//!
//! ## Example Usage
//!
//! ```ignore
//! use graph_store::{dataset, Direction, EdgeType, GraphStore, NodeId};
//! use std::path::Path;
//!
//! let graph = dataset::load_from_json(Path::new("data/movies.json"))?;
//!
//! let genres = graph.traverse(
//!     &NodeId::movie("Inception"),
//!     EdgeType::HasGenre,
//!     Direction::Outgoing,
//!     None,
//! )?;
//! ```
//!
//! The store is a pure reader during scoring: mutators exist on `MemoryGraph`
//! for load time, and the `GraphStore` trait itself exposes no writes.

// Public modules
pub mod dataset;
pub mod error;
pub mod memory;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DatasetError, DatasetResult, StoreError, StoreResult};
pub use memory::MemoryGraph;
pub use store::GraphStore;
pub use types::{
    Direction, EdgeFilter, EdgeType, Label, Movie, NodeFilter, NodeId, NodeRecord, Traversal,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = MemoryGraph::new();
        let (movies, users, ratings) = graph.counts();
        assert_eq!(movies, 0);
        assert_eq!(users, 0);
        assert_eq!(ratings, 0);

        let nodes = graph.find_nodes(Label::Movie, &NodeFilter::Any).unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_graph_store_is_object_safe() {
        let graph: Box<dyn GraphStore> = Box::new(MemoryGraph::new());
        let nodes = graph.find_nodes(Label::Genre, &NodeFilter::Any).unwrap();
        assert!(nodes.is_empty());
    }
}
