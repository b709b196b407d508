//! Collaborative (user-similarity) strategy.
//!
//! "Users who liked what you liked also liked these movies."
//!
//! ## Algorithm
//! 1. Find every user who rated at least one liked title at or above the
//!    threshold; each such user's `overlap` is the number of liked titles
//!    they rated highly.
//! 2. Every high-rated movie of those users that is NOT a liked title
//!    accumulates `score += overlap` and one distinct voter per user.
//! 3. Rank by score descending, voters descending, title ascending;
//!    truncate to the requested amount.
//! 4. Returned records carry the movie's genre list for display.
//!
//! The per-liked-title and per-user store queries fan out in parallel; the
//! merge is a commutative sum, so the result is identical regardless of
//! completion order.

use crate::aggregator::RelationshipAggregator;
use crate::error::{RecommendError, Result};
use crate::rank::{ScoredCandidate, rank_and_cut};
use crate::types::RankedMovie;
use graph_store::{GraphStore, Movie};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Default threshold above which a rating counts as "liked it"
pub const DEFAULT_MIN_RATING: f32 = 4.0;

/// Recommends movies rated highly by users with overlapping taste.
#[derive(Clone)]
pub struct CollaborativeStrategy {
    aggregator: RelationshipAggregator,

    /// Minimum rating for an edge to count, on both sides of the match
    min_rating: f32,
}

impl CollaborativeStrategy {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            aggregator: RelationshipAggregator::new(store),
            min_rating: DEFAULT_MIN_RATING,
        }
    }

    /// Configure the high-rating threshold (default: 4.0)
    pub fn with_min_rating(mut self, threshold: f32) -> Self {
        self.min_rating = threshold;
        self
    }

    /// Rank movies by how strongly similar users endorse them.
    ///
    /// Liked titles are never returned. An empty `liked_titles` yields an
    /// empty result (no users can qualify), as does `amount` of 0.
    #[instrument(skip(self, liked_titles), fields(liked = liked_titles.len()))]
    pub fn recommend(&self, liked_titles: &[String], amount: usize) -> Result<Vec<RankedMovie>> {
        if amount == 0 || liked_titles.is_empty() {
            return Ok(Vec::new());
        }
        let liked: HashSet<&str> = liked_titles.iter().map(String::as_str).collect();

        // Step 1: overlap per co-rater, summed across liked titles
        let overlap = self.find_overlaps(&liked)?;
        debug!("Found {} users overlapping the liked set", overlap.len());
        if overlap.is_empty() {
            return Ok(Vec::new());
        }

        // Step 2: score candidates from those users' high-rated movies
        let (scores, records) = self.score_candidates(&overlap, &liked)?;
        debug!("Scored {} candidate movies", scores.len());

        // Step 3: deterministic ordering and cutoff
        let candidates = scores
            .into_iter()
            .map(|(title, (score, voters))| ScoredCandidate::new(title, score, voters))
            .collect();
        let ranked = rank_and_cut(candidates, amount);

        // Step 4: attach genre lists for display
        let mut results = Vec::with_capacity(ranked.len());
        for candidate in ranked {
            let Some(movie) = records.get(&candidate.title).cloned() else {
                continue;
            };
            let genres = self.aggregator.genres_of(&candidate.title)?;
            results.push(RankedMovie::from_movie(
                movie,
                genres,
                Vec::new(),
                Vec::new(),
                candidate.score,
                candidate.voters,
            ));
        }
        Ok(results)
    }

    /// Users who rated at least one liked title highly, with their overlap
    /// count (how many liked titles they rated highly).
    fn find_overlaps(&self, liked: &HashSet<&str>) -> Result<HashMap<String, u32>> {
        liked
            .par_iter()
            .try_fold(
                || HashMap::new(),
                |mut local: HashMap<String, u32>, title| {
                    for user in self.aggregator.raters_of(title, self.min_rating)? {
                        *local.entry(user).or_insert(0) += 1;
                    }
                    Ok::<_, RecommendError>(local)
                },
            )
            .try_reduce(
                || HashMap::new(),
                |mut acc, local| {
                    for (user, count) in local {
                        *acc.entry(user).or_insert(0) += count;
                    }
                    Ok(acc)
                },
            )
    }

    /// Accumulate `(score, voters)` per candidate title, keeping each
    /// candidate's movie record for later enrichment.
    #[allow(clippy::type_complexity)]
    fn score_candidates(
        &self,
        overlap: &HashMap<String, u32>,
        liked: &HashSet<&str>,
    ) -> Result<(HashMap<String, (u32, u32)>, HashMap<String, Movie>)> {
        overlap
            .par_iter()
            .try_fold(
                || (HashMap::new(), HashMap::new()),
                |(mut scores, mut records): (HashMap<String, (u32, u32)>, HashMap<String, Movie>),
                 (user, user_overlap)| {
                    for movie in self.aggregator.rated_by(user, self.min_rating)? {
                        // A movie in the liked set is never a candidate
                        if liked.contains(movie.title.as_str()) {
                            continue;
                        }
                        let title = movie.title.clone();
                        let entry = scores.entry(title.clone()).or_insert((0, 0));
                        entry.0 += user_overlap;
                        entry.1 += 1;
                        records.entry(title).or_insert(movie);
                    }
                    Ok::<_, RecommendError>((scores, records))
                },
            )
            .try_reduce(
                || (HashMap::new(), HashMap::new()),
                |(mut scores, mut records), (local_scores, local_records)| {
                    for (title, (score, voters)) in local_scores {
                        let entry = scores.entry(title).or_insert((0, 0));
                        entry.0 += score;
                        entry.1 += voters;
                    }
                    for (title, movie) in local_records {
                        records.entry(title).or_insert(movie);
                    }
                    Ok((scores, records))
                },
            )
    }
}
