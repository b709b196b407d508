//! Ranking merge and cutoff shared by every strategy.
//!
//! All scores are integer sums, so the ordering is total: score descending,
//! voters descending, then title ascending. Two runs over the same snapshot
//! always produce the same list regardless of accumulation order.

use std::collections::HashSet;

/// A candidate mid-accumulation: identity plus its integer score components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub title: String,
    pub score: u32,
    /// Distinct contributing users (collaborative strategy; 0 elsewhere)
    pub voters: u32,
}

impl ScoredCandidate {
    pub fn new(title: impl Into<String>, score: u32, voters: u32) -> Self {
        Self {
            title: title.into(),
            score,
            voters,
        }
    }
}

/// Order candidates deterministically and truncate to the requested amount.
///
/// `amount` larger than the pool returns the whole pool, no padding;
/// `amount` of 0 returns an empty list.
pub fn rank_and_cut(mut candidates: Vec<ScoredCandidate>, amount: usize) -> Vec<ScoredCandidate> {
    candidates.sort_unstable_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.voters.cmp(&a.voters))
            .then_with(|| a.title.cmp(&b.title))
    });
    candidates.truncate(amount);
    candidates
}

/// Count of distinct names present in both sets.
pub(crate) fn distinct_overlap(a: &HashSet<String>, b: &HashSet<String>) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    a.intersection(b).count() as u32
}
