//! Relationship aggregation over the graph store.
//!
//! Every scoring strategy gathers its inputs through this one component:
//! given a node and a relation type, it answers with the multiset of
//! connected node identities (with edge attributes where present). Absence
//! of data answers with an empty multiset, never an error. No ordering
//! guarantee -- callers must not let input order affect their output.

use crate::error::Result;
use graph_store::{
    Direction, EdgeFilter, EdgeType, GraphStore, Label, Movie, NodeFilter, NodeId, Traversal,
};
use std::sync::Arc;

/// Neighbor-multiset queries used by the scoring strategies.
#[derive(Clone)]
pub struct RelationshipAggregator {
    store: Arc<dyn GraphStore>,
}

impl RelationshipAggregator {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Raw traversal passthrough for callers that need edge attributes.
    pub fn neighbors(
        &self,
        from: &NodeId,
        edge: EdgeType,
        direction: Direction,
        edge_filter: Option<&EdgeFilter>,
    ) -> Result<Vec<Traversal>> {
        Ok(self.store.traverse(from, edge, direction, edge_filter)?)
    }

    /// Genre names of a movie
    pub fn genres_of(&self, title: &str) -> Result<Vec<String>> {
        self.neighbor_keys(&NodeId::movie(title), EdgeType::HasGenre, Direction::Outgoing)
    }

    /// Director names of a movie
    pub fn directors_of(&self, title: &str) -> Result<Vec<String>> {
        self.neighbor_keys(&NodeId::movie(title), EdgeType::DirectedBy, Direction::Outgoing)
    }

    /// Actor names of a movie
    pub fn actors_of(&self, title: &str) -> Result<Vec<String>> {
        self.neighbor_keys(&NodeId::movie(title), EdgeType::ActedIn, Direction::Incoming)
    }

    /// Users who rated a movie at or above the threshold
    pub fn raters_of(&self, title: &str, min_rating: f32) -> Result<Vec<String>> {
        let filter = EdgeFilter::min_rating(min_rating);
        let traversals = self.store.traverse(
            &NodeId::movie(title),
            EdgeType::Rated,
            Direction::Incoming,
            Some(&filter),
        )?;
        Ok(traversals
            .into_iter()
            .map(|t| t.node.key().to_string())
            .collect())
    }

    /// Movies a user rated at or above the threshold, with full attributes
    pub fn rated_by(&self, user: &str, min_rating: f32) -> Result<Vec<Movie>> {
        let filter = EdgeFilter::min_rating(min_rating);
        let traversals = self.store.traverse(
            &NodeId::user(user),
            EdgeType::Rated,
            Direction::Outgoing,
            Some(&filter),
        )?;
        Ok(traversals
            .into_iter()
            .filter_map(|t| t.node.as_movie().cloned())
            .collect())
    }

    /// Movies matching an exact-key filter
    pub fn movies(&self, filter: &NodeFilter) -> Result<Vec<Movie>> {
        let records = self.store.find_nodes(Label::Movie, filter)?;
        Ok(records
            .into_iter()
            .filter_map(|r| r.as_movie().cloned())
            .collect())
    }

    /// A single movie by exact title
    pub fn movie(&self, title: &str) -> Result<Option<Movie>> {
        let mut found = self.movies(&NodeFilter::keys([title]))?;
        Ok(found.pop())
    }

    fn neighbor_keys(
        &self,
        from: &NodeId,
        edge: EdgeType,
        direction: Direction,
    ) -> Result<Vec<String>> {
        let traversals = self.store.traverse(from, edge, direction, None)?;
        Ok(traversals
            .into_iter()
            .map(|t| t.node.key().to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_store::MemoryGraph;

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
        graph.link_genre("Inception", "Thriller");
        graph.link_director("Inception", "Christopher Nolan");
        graph.link_actor("Leonardo DiCaprio", "Inception");
        graph.insert_rating("alice", "Inception", 5.0);
        graph.insert_rating("bob", "Inception", 3.0);
        Arc::new(graph)
    }

    #[test]
    fn test_relation_lists() {
        let aggregator = RelationshipAggregator::new(build_test_graph());

        assert_eq!(
            aggregator.genres_of("Inception").unwrap(),
            vec!["Sci-Fi", "Thriller"]
        );
        assert_eq!(
            aggregator.directors_of("Inception").unwrap(),
            vec!["Christopher Nolan"]
        );
        assert_eq!(
            aggregator.actors_of("Inception").unwrap(),
            vec!["Leonardo DiCaprio"]
        );
    }

    #[test]
    fn test_raters_respect_threshold() {
        let aggregator = RelationshipAggregator::new(build_test_graph());

        let high = aggregator.raters_of("Inception", 4.0).unwrap();
        assert_eq!(high, vec!["alice"]);

        let all = aggregator.raters_of("Inception", 1.0).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_rated_by_returns_movies() {
        let aggregator = RelationshipAggregator::new(build_test_graph());

        let movies = aggregator.rated_by("alice", 4.0).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Inception");

        assert!(aggregator.rated_by("bob", 4.0).unwrap().is_empty());
    }

    #[test]
    fn test_absent_relations_yield_empty_multiset() {
        let aggregator = RelationshipAggregator::new(build_test_graph());

        assert!(aggregator.genres_of("Unknown").unwrap().is_empty());
        assert!(aggregator.raters_of("Unknown", 4.0).unwrap().is_empty());
        assert!(aggregator.movie("Unknown").unwrap().is_none());
    }
}
