//! JSON dataset loading.
//!
//! A dataset file carries the whole graph in one document: movies with their
//! embedded genre/director/actor name lists, and a flat list of ratings.
//!
//! ```json
//! {
//!   "movies": [
//!     {
//!       "title": "Inception", "year": 2010, "runtime": 148,
//!       "language": "en", "release_date": "2010-07-16",
//!       "genres": ["Sci-Fi", "Thriller"],
//!       "directors": ["Christopher Nolan"],
//!       "actors": ["Leonardo DiCaprio"]
//!     }
//!   ],
//!   "ratings": [
//!     { "user": "alice", "title": "Inception", "rating": 5.0 }
//!   ]
//! }
//! ```

use crate::error::{DatasetError, DatasetResult};
use crate::memory::MemoryGraph;
use crate::types::Movie;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One movie entry in a dataset file
#[derive(Debug, Clone, Deserialize)]
pub struct MovieEntry {
    pub title: String,
    pub year: u16,
    pub runtime: u32,
    pub language: String,
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
}

/// One rating entry in a dataset file
#[derive(Debug, Clone, Deserialize)]
pub struct RatingEntry {
    pub user: String,
    pub title: String,
    pub rating: f32,
}

/// Top-level dataset document
#[derive(Debug, Deserialize)]
pub struct DatasetFile {
    pub movies: Vec<MovieEntry>,
    #[serde(default)]
    pub ratings: Vec<RatingEntry>,
}

/// Load a dataset file from disk into a `MemoryGraph`.
pub fn load_from_json(path: &Path) -> DatasetResult<MemoryGraph> {
    let contents = fs::read_to_string(path)?;
    parse_json(&contents)
}

/// Parse a dataset JSON document into a `MemoryGraph`.
///
/// Ratings are checked against the 1.0-5.0 range and must reference a movie
/// declared in the same document; the built graph is validated before it is
/// returned.
pub fn parse_json(json: &str) -> DatasetResult<MemoryGraph> {
    let dataset: DatasetFile = serde_json::from_str(json)?;

    let mut graph = MemoryGraph::new();
    for entry in &dataset.movies {
        graph.insert_movie(Movie {
            title: entry.title.clone(),
            year: entry.year,
            runtime: entry.runtime,
            language: entry.language.clone(),
            release_date: entry.release_date.clone(),
        });
        for genre in &entry.genres {
            graph.link_genre(&entry.title, genre);
        }
        for director in &entry.directors {
            graph.link_director(&entry.title, director);
        }
        for actor in &entry.actors {
            graph.link_actor(actor, &entry.title);
        }
    }

    for rating in &dataset.ratings {
        if !(1.0..=5.0).contains(&rating.rating) {
            return Err(DatasetError::InvalidValue {
                field: "rating".to_string(),
                value: rating.rating.to_string(),
            });
        }
        graph.insert_rating(&rating.user, &rating.title, rating.rating);
    }

    graph.validate()?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GraphStore;
    use crate::types::{Direction, EdgeType, Label, NodeFilter, NodeId};

    const DATASET: &str = r#"{
        "movies": [
            {
                "title": "Inception", "year": 2010, "runtime": 148,
                "language": "en", "release_date": "2010-07-16",
                "genres": ["Sci-Fi", "Thriller"],
                "directors": ["Christopher Nolan"],
                "actors": ["Leonardo DiCaprio", "Michael Caine"]
            },
            {
                "title": "Arrival", "year": 2016, "runtime": 116,
                "language": "en", "release_date": "2016-11-11",
                "genres": ["Sci-Fi", "Drama"]
            }
        ],
        "ratings": [
            { "user": "alice", "title": "Inception", "rating": 5.0 },
            { "user": "alice", "title": "Arrival", "rating": 4.0 },
            { "user": "bob", "title": "Inception", "rating": 3.5 }
        ]
    }"#;

    #[test]
    fn test_parse_dataset() {
        let graph = parse_json(DATASET).unwrap();
        let (movies, users, ratings) = graph.counts();
        assert_eq!(movies, 2);
        assert_eq!(users, 2);
        assert_eq!(ratings, 3);

        let genres = graph
            .traverse(
                &NodeId::movie("Inception"),
                EdgeType::HasGenre,
                Direction::Outgoing,
                None,
            )
            .unwrap();
        assert_eq!(genres.len(), 2);

        let actors = graph.find_nodes(Label::Actor, &NodeFilter::Any).unwrap();
        assert_eq!(actors.len(), 2);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let graph = parse_json(DATASET).unwrap();
        let directors = graph
            .traverse(
                &NodeId::movie("Arrival"),
                EdgeType::DirectedBy,
                Direction::Outgoing,
                None,
            )
            .unwrap();
        assert!(directors.is_empty());
    }

    #[test]
    fn test_out_of_range_rating_is_rejected() {
        let json = r#"{
            "movies": [
                { "title": "M", "year": 2000, "runtime": 100,
                  "language": "en", "release_date": "2000-01-01" }
            ],
            "ratings": [ { "user": "u", "title": "M", "rating": 0.5 } ]
        }"#;
        assert!(matches!(
            parse_json(json),
            Err(DatasetError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_rating_for_unknown_movie_is_rejected() {
        let json = r#"{
            "movies": [],
            "ratings": [ { "user": "u", "title": "Ghost", "rating": 4.0 } ]
        }"#;
        assert!(matches!(
            parse_json(json),
            Err(DatasetError::MissingReference { .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            parse_json("{ not json"),
            Err(DatasetError::Json(_))
        ));
    }
}
