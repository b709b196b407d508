//! Content-based strategy.
//!
//! Scores every movie outside the seed set by what it shares with the seeds:
//! genres, directors and actors, summed over all seed movies.
//!
//! ## Algorithm
//! 1. Build a profile (runtime + genre/director/actor sets) per seed title.
//! 2. For every other movie, sum the shared-neighbor counts against each
//!    seed whose runtime is within the proximity window.
//! 3. Rank by score descending, title ascending; truncate.
//!
//! Runtime proximity (|runtime difference| < 10 minutes) is a binary filter
//! on which seed/candidate pairs are considered at all -- it is never added
//! to the score. Whether it should contribute a point instead is an open
//! product question; the filter-only behavior is kept deliberately.
//!
//! The per-candidate scoring fans out in parallel; each candidate's sum over
//! seeds is order-independent, so results are deterministic.

use crate::aggregator::RelationshipAggregator;
use crate::error::Result;
use crate::rank::{ScoredCandidate, distinct_overlap, rank_and_cut};
use crate::types::RankedMovie;
use graph_store::{GraphStore, Movie, NodeFilter};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Seed/candidate pairs further apart than this many minutes of runtime are
/// not considered
pub const DEFAULT_RUNTIME_WINDOW: u32 = 10;

/// Everything the scorer needs to know about one seed movie
struct SeedProfile {
    runtime: u32,
    genres: HashSet<String>,
    directors: HashSet<String>,
    actors: HashSet<String>,
}

/// A scored candidate with its relationship lists kept for display
struct ContentMatch {
    movie: Movie,
    genres: Vec<String>,
    directors: Vec<String>,
    actors: Vec<String>,
    score: u32,
}

/// Recommends movies that share genres, directors and actors with a seed set.
#[derive(Clone)]
pub struct ContentStrategy {
    aggregator: RelationshipAggregator,
    runtime_window: u32,
}

impl ContentStrategy {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            aggregator: RelationshipAggregator::new(store),
            runtime_window: DEFAULT_RUNTIME_WINDOW,
        }
    }

    /// Configure the runtime proximity window in minutes (default: 10)
    pub fn with_runtime_window(mut self, minutes: u32) -> Self {
        self.runtime_window = minutes;
        self
    }

    /// Rank movies by similarity to the seed set.
    ///
    /// Seed titles are never returned, and the score is invariant to the
    /// order of `seed_titles`. Candidates that end up sharing nothing with
    /// any runtime-proximate seed are dropped rather than ranked at zero.
    #[instrument(skip(self, seed_titles), fields(seeds = seed_titles.len()))]
    pub fn recommend(&self, seed_titles: &[String], amount: usize) -> Result<Vec<RankedMovie>> {
        if amount == 0 || seed_titles.is_empty() {
            return Ok(Vec::new());
        }
        let seed_set: HashSet<&str> = seed_titles.iter().map(String::as_str).collect();

        // Unknown seed titles contribute nothing; absence of data is not an
        // error
        let seeds = self.seed_profiles(&seed_set)?;
        debug!("Built {} seed profiles", seeds.len());
        if seeds.is_empty() {
            return Ok(Vec::new());
        }

        let candidates: Vec<Movie> = self
            .aggregator
            .movies(&NodeFilter::Any)?
            .into_iter()
            .filter(|m| !seed_set.contains(m.title.as_str()))
            .collect();

        let matches: Vec<Option<ContentMatch>> = candidates
            .par_iter()
            .map(|movie| self.score_candidate(movie, &seeds))
            .collect::<Result<_>>()?;
        let mut matches: HashMap<String, ContentMatch> = matches
            .into_iter()
            .flatten()
            .map(|m| (m.movie.title.clone(), m))
            .collect();
        debug!("{} candidates share something with the seeds", matches.len());

        let scored = matches
            .values()
            .map(|m| ScoredCandidate::new(m.movie.title.clone(), m.score, 0))
            .collect();
        let ranked = rank_and_cut(scored, amount);

        Ok(ranked
            .into_iter()
            .filter_map(|candidate| matches.remove(&candidate.title))
            .map(|m| {
                RankedMovie::from_movie(m.movie, m.genres, m.directors, m.actors, m.score, 0)
            })
            .collect())
    }

    fn seed_profiles(&self, seed_set: &HashSet<&str>) -> Result<Vec<SeedProfile>> {
        let mut profiles = Vec::with_capacity(seed_set.len());
        for title in seed_set {
            let Some(movie) = self.aggregator.movie(title)? else {
                continue;
            };
            profiles.push(SeedProfile {
                runtime: movie.runtime,
                genres: self.aggregator.genres_of(title)?.into_iter().collect(),
                directors: self.aggregator.directors_of(title)?.into_iter().collect(),
                actors: self.aggregator.actors_of(title)?.into_iter().collect(),
            });
        }
        Ok(profiles)
    }

    /// Sum shared genres/directors/actors over every runtime-proximate seed.
    ///
    /// Returns None when no proximate seed shares anything -- the candidate
    /// carries no signal to rank on.
    fn score_candidate(&self, movie: &Movie, seeds: &[SeedProfile]) -> Result<Option<ContentMatch>> {
        let genres = self.aggregator.genres_of(&movie.title)?;
        let directors = self.aggregator.directors_of(&movie.title)?;
        let actors = self.aggregator.actors_of(&movie.title)?;

        let genre_set: HashSet<String> = genres.iter().cloned().collect();
        let director_set: HashSet<String> = directors.iter().cloned().collect();
        let actor_set: HashSet<String> = actors.iter().cloned().collect();

        let mut score = 0;
        for seed in seeds {
            if movie.runtime.abs_diff(seed.runtime) >= self.runtime_window {
                continue;
            }
            score += distinct_overlap(&genre_set, &seed.genres)
                + distinct_overlap(&director_set, &seed.directors)
                + distinct_overlap(&actor_set, &seed.actors);
        }

        if score == 0 {
            return Ok(None);
        }
        Ok(Some(ContentMatch {
            movie: movie.clone(),
            genres,
            directors,
            actors,
            score,
        }))
    }
}
