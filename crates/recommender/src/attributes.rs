//! Attribute-weighted strategy.
//!
//! Scores every movie in the catalog against explicit criteria: genre,
//! director and actor name sets, a runtime range, language codes and release
//! decades. The total is the unweighted sum of six components -- three
//! distinct-match counts and three binary checks.
//!
//! The runtime component is asymmetric on purpose: it is always evaluated,
//! so the default [0, 300] range contributes its point even when the caller
//! gave no explicit range, while the other optional dimensions score 0 when
//! their filter set is empty. Preserved as-is; an open product question, not
//! a bug.

use crate::aggregator::RelationshipAggregator;
use crate::error::{RecommendError, Result};
use crate::rank::{ScoredCandidate, distinct_overlap, rank_and_cut};
use crate::types::RankedMovie;
use graph_store::{GraphStore, Movie, NodeFilter};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Inclusive runtime bounds in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeRange {
    pub min: u32,
    pub max: u32,
}

impl Default for RuntimeRange {
    fn default() -> Self {
        Self { min: 0, max: 300 }
    }
}

impl RuntimeRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, runtime: u32) -> bool {
        (self.min..=self.max).contains(&runtime)
    }
}

/// Multi-attribute matching criteria.
///
/// Every set is optional; an empty set contributes 0 to the score. The
/// runtime range always contributes (default [0, 300]).
#[derive(Debug, Clone, Default)]
pub struct AttributeCriteria {
    pub genres: HashSet<String>,
    pub directors: HashSet<String>,
    pub actors: HashSet<String>,
    pub runtime: RuntimeRange,
    pub languages: HashSet<String>,
    /// Decade buckets, e.g. 1990, 2000
    pub decades: HashSet<u16>,
}

impl AttributeCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_directors(mut self, directors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.directors = directors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_actors(mut self, actors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.actors = actors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_runtime(mut self, min: u32, max: u32) -> Self {
        self.runtime = RuntimeRange::new(min, max);
        self
    }

    pub fn with_languages(mut self, languages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_decades(mut self, decades: impl IntoIterator<Item = u16>) -> Self {
        self.decades = decades.into_iter().collect();
        self
    }

    /// Reject malformed criteria before any store query runs.
    pub fn validate(&self) -> Result<()> {
        if self.runtime.min > self.runtime.max {
            return Err(RecommendError::InvalidInput(format!(
                "runtime range min {} exceeds max {}",
                self.runtime.min, self.runtime.max
            )));
        }
        Ok(())
    }
}

/// The decade bucket a release year falls into.
fn decade_bucket(year: u16) -> u16 {
    (year / 10) * 10
}

/// A scored movie with its relationship lists kept for display
struct AttributeMatch {
    movie: Movie,
    genres: Vec<String>,
    directors: Vec<String>,
    actors: Vec<String>,
    score: u32,
}

/// Scores the whole catalog against attribute criteria.
#[derive(Clone)]
pub struct AttributeStrategy {
    aggregator: RelationshipAggregator,
}

impl AttributeStrategy {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            aggregator: RelationshipAggregator::new(store),
        }
    }

    /// Rank every movie by how many criteria it matches.
    ///
    /// Returned records carry the movie's full genre/director/actor lists,
    /// not just the matching names.
    #[instrument(skip(self, criteria))]
    pub fn recommend(&self, criteria: &AttributeCriteria, amount: usize) -> Result<Vec<RankedMovie>> {
        criteria.validate()?;
        if amount == 0 {
            return Ok(Vec::new());
        }

        let movies = self.aggregator.movies(&NodeFilter::Any)?;
        debug!("Scoring {} movies against the criteria", movies.len());

        let scored: Vec<AttributeMatch> = movies
            .par_iter()
            .map(|movie| self.score_movie(movie, criteria))
            .collect::<Result<_>>()?;

        let candidates = scored
            .iter()
            .map(|m| ScoredCandidate::new(m.movie.title.clone(), m.score, 0))
            .collect();
        let ranked = rank_and_cut(candidates, amount);

        let mut by_title: HashMap<String, AttributeMatch> = scored
            .into_iter()
            .map(|m| (m.movie.title.clone(), m))
            .collect();
        Ok(ranked
            .into_iter()
            .filter_map(|candidate| by_title.remove(&candidate.title))
            .map(|m| {
                RankedMovie::from_movie(m.movie, m.genres, m.directors, m.actors, m.score, 0)
            })
            .collect())
    }

    /// One movie's six-component score, with its lists kept for display.
    fn score_movie(&self, movie: &Movie, criteria: &AttributeCriteria) -> Result<AttributeMatch> {
        let genres = self.aggregator.genres_of(&movie.title)?;
        let directors = self.aggregator.directors_of(&movie.title)?;
        let actors = self.aggregator.actors_of(&movie.title)?;

        let genre_score = distinct_overlap(&genres.iter().cloned().collect(), &criteria.genres);
        let director_score =
            distinct_overlap(&directors.iter().cloned().collect(), &criteria.directors);
        let actor_score = distinct_overlap(&actors.iter().cloned().collect(), &criteria.actors);
        let runtime_score = u32::from(criteria.runtime.contains(movie.runtime));
        let language_score = u32::from(
            !criteria.languages.is_empty() && criteria.languages.contains(&movie.language),
        );
        let decade_score = u32::from(
            !criteria.decades.is_empty() && criteria.decades.contains(&decade_bucket(movie.year)),
        );

        let total = genre_score
            + director_score
            + actor_score
            + runtime_score
            + language_score
            + decade_score;
        Ok(AttributeMatch {
            movie: movie.clone(),
            genres,
            directors,
            actors,
            score: total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_store::MemoryGraph;

    fn build_test_graph() -> Arc<dyn GraphStore> {
        let mut graph = MemoryGraph::new();

        graph.insert_movie(Movie {
            title: "Dune".to_string(),
            year: 2021,
            runtime: 155,
            language: "en".to_string(),
            release_date: "2021-10-22".to_string(),
        });
        graph.link_genre("Dune", "Sci-Fi");
        graph.link_genre("Dune", "Adventure");
        graph.link_director("Dune", "Denis Villeneuve");
        graph.link_actor("Timothee Chalamet", "Dune");

        graph.insert_movie(Movie {
            title: "Amelie".to_string(),
            year: 2001,
            runtime: 122,
            language: "fr".to_string(),
            release_date: "2001-04-25".to_string(),
        });
        graph.link_genre("Amelie", "Romance");

        graph.insert_movie(Movie {
            title: "Gettysburg".to_string(),
            year: 1993,
            runtime: 320,
            language: "en".to_string(),
            release_date: "1993-10-08".to_string(),
        });
        graph.link_genre("Gettysburg", "War");

        Arc::new(graph)
    }

    #[test]
    fn test_six_component_sum() {
        let strategy = AttributeStrategy::new(build_test_graph());
        let criteria = AttributeCriteria::new()
            .with_genres(["Sci-Fi"])
            .with_runtime(120, 180)
            .with_languages(["en"])
            .with_decades([2020]);

        let results = strategy.recommend(&criteria, 5).unwrap();
        assert_eq!(results[0].title, "Dune");
        // genre + runtime + language + decade
        assert_eq!(results[0].score, 4);
        // Full lists attached, not just the matches
        assert_eq!(results[0].genres, vec!["Sci-Fi", "Adventure"]);
    }

    #[test]
    fn test_empty_sets_score_zero_but_runtime_always_counts() {
        let strategy = AttributeStrategy::new(build_test_graph());
        let results = strategy.recommend(&AttributeCriteria::new(), 5).unwrap();

        // Every movie within the default [0, 300] range scores exactly 1,
        // ties broken purely by title
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "Amelie");
        assert_eq!(results[0].score, 1);
        assert_eq!(results[1].title, "Dune");
        assert_eq!(results[1].score, 1);
        // Gettysburg runs 320 minutes, outside the default range
        assert_eq!(results[2].title, "Gettysburg");
        assert_eq!(results[2].score, 0);
    }

    #[test]
    fn test_distinct_match_counts() {
        let strategy = AttributeStrategy::new(build_test_graph());
        let criteria = AttributeCriteria::new()
            .with_genres(["Sci-Fi", "Adventure", "War"])
            .with_runtime(0, 300);

        let results = strategy.recommend(&criteria, 5).unwrap();
        // Dune matches two of the requested genres plus runtime
        assert_eq!(results[0].title, "Dune");
        assert_eq!(results[0].score, 3);
    }

    #[test]
    fn test_language_and_decade_require_nonempty_sets() {
        let strategy = AttributeStrategy::new(build_test_graph());
        let criteria = AttributeCriteria::new()
            .with_languages(["fr"])
            .with_decades([2000]);

        let results = strategy.recommend(&criteria, 5).unwrap();
        // Amelie: runtime + language + decade
        assert_eq!(results[0].title, "Amelie");
        assert_eq!(results[0].score, 3);
    }

    #[test]
    fn test_invalid_runtime_range_is_rejected() {
        let strategy = AttributeStrategy::new(build_test_graph());
        let criteria = AttributeCriteria::new().with_runtime(200, 100);

        assert!(matches!(
            strategy.recommend(&criteria, 5),
            Err(RecommendError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_amount_zero_yields_empty_result() {
        let strategy = AttributeStrategy::new(build_test_graph());
        assert!(
            strategy
                .recommend(&AttributeCriteria::new(), 0)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_decade_bucket() {
        assert_eq!(decade_bucket(1999), 1990);
        assert_eq!(decade_bucket(2000), 2000);
        assert_eq!(decade_bucket(2021), 2020);
    }
}
