//! In-memory `GraphStore` backed by HashMap adjacency indices.
//!
//! This is the store used by the CLI and the test suites. It keeps a forward
//! and a reverse index per edge type so every traversal direction is an O(1)
//! lookup plus a scan of the adjacency list.
//!
//! Mutators exist for load time only; the scoring engine never writes.

use crate::error::{DatasetError, DatasetResult, StoreResult};
use crate::store::GraphStore;
use crate::types::{
    Direction, EdgeFilter, EdgeType, Label, Movie, NodeFilter, NodeId, NodeRecord, Traversal,
};
use std::collections::HashMap;

/// HashMap-backed movie graph.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    // Primary store: movies by title
    movies: HashMap<String, Movie>,

    // HAS_GENRE adjacency (forward and reverse)
    movie_genres: HashMap<String, Vec<String>>,
    genre_movies: HashMap<String, Vec<String>>,

    // DIRECTED_BY adjacency
    movie_directors: HashMap<String, Vec<String>>,
    director_movies: HashMap<String, Vec<String>>,

    // ACTED_IN adjacency (actor -> movie is the forward direction)
    actor_movies: HashMap<String, Vec<String>>,
    movie_actors: HashMap<String, Vec<String>>,

    // RATED adjacency with the edge's rating attribute
    user_ratings: HashMap<String, Vec<(String, f32)>>,
    movie_ratings: HashMap<String, Vec<(String, f32)>>,
}

impl MemoryGraph {
    /// Creates a new, empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a movie node, replacing any previous node with the same title
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.title.clone(), movie);
    }

    /// Link a movie to a genre (HAS_GENRE). Duplicate links are ignored.
    pub fn link_genre(&mut self, title: &str, genre: &str) {
        push_edge(&mut self.movie_genres, title, genre);
        push_edge(&mut self.genre_movies, genre, title);
    }

    /// Link a movie to a director (DIRECTED_BY). Duplicate links are ignored.
    pub fn link_director(&mut self, title: &str, director: &str) {
        push_edge(&mut self.movie_directors, title, director);
        push_edge(&mut self.director_movies, director, title);
    }

    /// Link an actor to a movie (ACTED_IN). Duplicate links are ignored.
    pub fn link_actor(&mut self, actor: &str, title: &str) {
        push_edge(&mut self.actor_movies, actor, title);
        push_edge(&mut self.movie_actors, title, actor);
    }

    /// Insert a RATED edge.
    ///
    /// One edge per (user, movie) pair: inserting a second rating for the
    /// same pair replaces the first.
    pub fn insert_rating(&mut self, user: &str, title: &str, rating: f32) {
        upsert_rating(&mut self.user_ratings, user, title, rating);
        upsert_rating(&mut self.movie_ratings, title, user, rating);
    }

    /// (movies, users, ratings) counts for validation and logging
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_ratings = self.user_ratings.values().map(|v| v.len()).sum();
        (self.movies.len(), self.user_ratings.len(), total_ratings)
    }

    /// Validate referential integrity after loading.
    ///
    /// Checks that every rated or linked title refers to an inserted movie
    /// and that every rating is within 1.0-5.0.
    pub fn validate(&self) -> DatasetResult<()> {
        for (title, ratings) in &self.movie_ratings {
            if !self.movies.contains_key(title) {
                return Err(DatasetError::MissingReference {
                    entity: "Movie".to_string(),
                    key: title.clone(),
                });
            }
            for (_, rating) in ratings {
                if !(1.0..=5.0).contains(rating) {
                    return Err(DatasetError::InvalidValue {
                        field: "rating".to_string(),
                        value: rating.to_string(),
                    });
                }
            }
        }
        for title in self
            .movie_genres
            .keys()
            .chain(self.movie_directors.keys())
            .chain(self.movie_actors.keys())
        {
            if !self.movies.contains_key(title) {
                return Err(DatasetError::MissingReference {
                    entity: "Movie".to_string(),
                    key: title.clone(),
                });
            }
        }
        Ok(())
    }

    fn movie_record(&self, title: &str) -> Option<NodeRecord> {
        self.movies.get(title).cloned().map(NodeRecord::Movie)
    }

    /// Adjacency list -> traversals over plain (unrated) edges
    fn plain_neighbors(
        adjacency: &HashMap<String, Vec<String>>,
        key: &str,
        make: impl Fn(&str) -> Option<NodeRecord>,
    ) -> Vec<Traversal> {
        adjacency
            .get(key)
            .map(|neighbors| {
                neighbors
                    .iter()
                    .filter_map(|n| make(n))
                    .map(|node| Traversal { node, rating: None })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Adjacency list -> traversals over RATED edges, honoring the filter
    fn rated_neighbors(
        adjacency: &HashMap<String, Vec<(String, f32)>>,
        key: &str,
        edge_filter: Option<&EdgeFilter>,
        make: impl Fn(&str) -> Option<NodeRecord>,
    ) -> Vec<Traversal> {
        let filter = edge_filter.copied().unwrap_or_default();
        adjacency
            .get(key)
            .map(|neighbors| {
                neighbors
                    .iter()
                    .filter(|(_, rating)| filter.accepts(Some(*rating)))
                    .filter_map(|(n, rating)| {
                        make(n).map(|node| Traversal {
                            node,
                            rating: Some(*rating),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl GraphStore for MemoryGraph {
    fn find_nodes(&self, label: Label, filter: &NodeFilter) -> StoreResult<Vec<NodeRecord>> {
        let records = match label {
            Label::Movie => match filter {
                // Key-set lookups hit the primary index directly
                NodeFilter::Keys(keys) => keys
                    .iter()
                    .filter_map(|title| self.movie_record(title))
                    .collect(),
                NodeFilter::Any => self
                    .movies
                    .values()
                    .map(|m| NodeRecord::Movie(m.clone()))
                    .collect(),
            },
            Label::Genre => collect_keys(&self.genre_movies, filter, NodeRecord::Genre),
            Label::Director => collect_keys(&self.director_movies, filter, NodeRecord::Director),
            Label::Actor => collect_keys(&self.actor_movies, filter, NodeRecord::Actor),
            Label::User => collect_keys(&self.user_ratings, filter, NodeRecord::User),
        };
        Ok(records)
    }

    fn traverse(
        &self,
        from: &NodeId,
        edge: EdgeType,
        direction: Direction,
        edge_filter: Option<&EdgeFilter>,
    ) -> StoreResult<Vec<Traversal>> {
        use Direction::{Incoming, Outgoing};

        let key = from.key.as_str();
        let traversals = match (edge, from.label, direction) {
            (EdgeType::Rated, Label::User, Outgoing) => {
                Self::rated_neighbors(&self.user_ratings, key, edge_filter, |t| {
                    self.movie_record(t)
                })
            }
            (EdgeType::Rated, Label::Movie, Incoming) => {
                Self::rated_neighbors(&self.movie_ratings, key, edge_filter, |u| {
                    Some(NodeRecord::User(u.to_string()))
                })
            }
            (EdgeType::HasGenre, Label::Movie, Outgoing) => {
                Self::plain_neighbors(&self.movie_genres, key, |g| {
                    Some(NodeRecord::Genre(g.to_string()))
                })
            }
            (EdgeType::HasGenre, Label::Genre, Incoming) => {
                Self::plain_neighbors(&self.genre_movies, key, |t| self.movie_record(t))
            }
            (EdgeType::DirectedBy, Label::Movie, Outgoing) => {
                Self::plain_neighbors(&self.movie_directors, key, |d| {
                    Some(NodeRecord::Director(d.to_string()))
                })
            }
            (EdgeType::DirectedBy, Label::Director, Incoming) => {
                Self::plain_neighbors(&self.director_movies, key, |t| self.movie_record(t))
            }
            (EdgeType::ActedIn, Label::Actor, Outgoing) => {
                Self::plain_neighbors(&self.actor_movies, key, |t| self.movie_record(t))
            }
            (EdgeType::ActedIn, Label::Movie, Incoming) => {
                Self::plain_neighbors(&self.movie_actors, key, |a| {
                    Some(NodeRecord::Actor(a.to_string()))
                })
            }
            // Any other (edge, label, direction) combination has no matching
            // pattern in the graph; absence of data is not an error
            _ => Vec::new(),
        };
        Ok(traversals)
    }
}

fn push_edge(adjacency: &mut HashMap<String, Vec<String>>, from: &str, to: &str) {
    let neighbors = adjacency.entry(from.to_string()).or_default();
    if !neighbors.iter().any(|n| n == to) {
        neighbors.push(to.to_string());
    }
}

fn upsert_rating(
    adjacency: &mut HashMap<String, Vec<(String, f32)>>,
    from: &str,
    to: &str,
    rating: f32,
) {
    let neighbors = adjacency.entry(from.to_string()).or_default();
    match neighbors.iter_mut().find(|(n, _)| n == to) {
        Some(edge) => edge.1 = rating,
        None => neighbors.push((to.to_string(), rating)),
    }
}

fn collect_keys<V>(
    adjacency: &HashMap<String, V>,
    filter: &NodeFilter,
    make: impl Fn(String) -> NodeRecord,
) -> Vec<NodeRecord> {
    adjacency
        .keys()
        .filter(|key| filter.matches(key))
        .map(|key| make(key.clone()))
        .collect()
}
