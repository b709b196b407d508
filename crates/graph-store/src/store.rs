//! The graph store query contract.
//!
//! The scoring engine depends only on this trait, never on a backend's
//! internals. Two primitives cover everything the engine asks for: exact
//! node lookup by label, and single-hop traversal with an optional edge
//! filter. Grouping and score accumulation happen on the engine side.

use crate::error::StoreResult;
use crate::types::{Direction, EdgeFilter, EdgeType, Label, NodeFilter, NodeId, NodeRecord, Traversal};

/// Read-only pattern queries against the movie graph.
///
/// Implementations must be shareable across threads (`Send + Sync`); the
/// engine issues independent reads concurrently and merges them itself.
/// Single-snapshot consistency across calls is not required -- scores are
/// advisory rankings and tolerate read skew.
pub trait GraphStore: Send + Sync {
    /// All nodes with the given label that match the filter.
    ///
    /// Movie records come back with their full attributes. No ordering
    /// guarantee.
    fn find_nodes(&self, label: Label, filter: &NodeFilter) -> StoreResult<Vec<NodeRecord>>;

    /// Single-hop traversal from a node along one edge type.
    ///
    /// Returns the reached nodes together with the edge's rating attribute
    /// where the edge carries one. An unknown starting node, or a node with
    /// no such relation, answers with an empty Vec -- absence of data is not
    /// an error. No ordering guarantee; callers must not let input order
    /// affect their output.
    fn traverse(
        &self,
        from: &NodeId,
        edge: EdgeType,
        direction: Direction,
        edge_filter: Option<&EdgeFilter>,
    ) -> StoreResult<Vec<Traversal>>;
}
