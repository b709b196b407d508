//! Core domain types for the movie graph.
//!
//! The graph has five node labels (Movie, Genre, Director, Actor, User) and
//! four edge types. Movies carry display attributes; the other labels are
//! pure name/id nodes. Node identity is the title for movies and the name
//! (or user id) for everything else -- titles are the sole join key used
//! anywhere in the system.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Node labels in the movie graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Movie,
    Genre,
    Director,
    Actor,
    User,
}

/// Edge types in the movie graph.
///
/// - `Rated`: User -> Movie, carries a rating attribute (1.0-5.0)
/// - `HasGenre`: Movie -> Genre
/// - `DirectedBy`: Movie -> Director
/// - `ActedIn`: Actor -> Movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeType {
    Rated,
    HasGenre,
    DirectedBy,
    ActedIn,
}

/// Traversal direction relative to the starting node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Outgoing,
    Incoming,
}

/// A movie node with its display attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique, case-sensitive title
    pub title: String,
    /// Release year
    pub year: u16,
    /// Runtime in minutes
    pub runtime: u32,
    /// Original language code (e.g., "en")
    pub language: String,
    /// Release date as a date-string (e.g., "2021-10-22")
    pub release_date: String,
}

/// Identifies a node by label and key.
///
/// The key is the movie title, the genre/director/actor name, or the user id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub label: Label,
    pub key: String,
}

impl NodeId {
    pub fn new(label: Label, key: impl Into<String>) -> Self {
        Self {
            label,
            key: key.into(),
        }
    }

    /// Shorthand for a movie node id.
    pub fn movie(title: impl Into<String>) -> Self {
        Self::new(Label::Movie, title)
    }

    /// Shorthand for a user node id.
    pub fn user(id: impl Into<String>) -> Self {
        Self::new(Label::User, id)
    }
}

/// A node returned from a query.
///
/// Movie nodes carry their full attributes; label nodes carry only their key.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeRecord {
    Movie(Movie),
    Genre(String),
    Director(String),
    Actor(String),
    User(String),
}

impl NodeRecord {
    /// The node's identity key (title for movies, name or id otherwise).
    pub fn key(&self) -> &str {
        match self {
            NodeRecord::Movie(movie) => &movie.title,
            NodeRecord::Genre(name)
            | NodeRecord::Director(name)
            | NodeRecord::Actor(name)
            | NodeRecord::User(name) => name,
        }
    }

    pub fn label(&self) -> Label {
        match self {
            NodeRecord::Movie(_) => Label::Movie,
            NodeRecord::Genre(_) => Label::Genre,
            NodeRecord::Director(_) => Label::Director,
            NodeRecord::Actor(_) => Label::Actor,
            NodeRecord::User(_) => Label::User,
        }
    }

    /// The movie attributes, if this is a movie node.
    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            NodeRecord::Movie(movie) => Some(movie),
            _ => None,
        }
    }
}

/// Node filter for `find_nodes`.
///
/// Only exact-match lookups are supported; fuzzy title search belongs to an
/// external full-text index, not to this store.
#[derive(Debug, Clone, Default)]
pub enum NodeFilter {
    /// Match every node with the requested label
    #[default]
    Any,
    /// Match nodes whose key is in the given set
    Keys(HashSet<String>),
}

impl NodeFilter {
    /// Build a key-set filter from any collection of keys.
    pub fn keys(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        NodeFilter::Keys(keys.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, key: &str) -> bool {
        match self {
            NodeFilter::Any => true,
            NodeFilter::Keys(keys) => keys.contains(key),
        }
    }
}

/// Optional edge-attribute filter for traversals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeFilter {
    /// Keep only edges whose rating is at least this value
    pub min_rating: Option<f32>,
}

impl EdgeFilter {
    pub fn min_rating(threshold: f32) -> Self {
        Self {
            min_rating: Some(threshold),
        }
    }

    /// Whether an edge with the given rating attribute passes the filter.
    ///
    /// Edges without a rating fail any `min_rating` threshold.
    pub fn accepts(&self, rating: Option<f32>) -> bool {
        match self.min_rating {
            Some(threshold) => rating.is_some_and(|r| r >= threshold),
            None => true,
        }
    }
}

/// A node reached by a traversal, with the edge's rating where the edge
/// carries one (Rated edges only).
#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    pub node: NodeRecord,
    pub rating: Option<f32>,
}
