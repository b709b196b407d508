//! # Recommendation Engine
//!
//! Coordinates one ranking request end to end:
//! 1. Pick the strategy for the request
//! 2. Run the synchronous scoring on a blocking worker
//! 3. Log timing and result counts
//! 4. Return the ranked list (or the typed failure)
//!
//! The engine is stateless between requests: every call re-derives its
//! scores from the injected store handle. Dropping a returned future
//! abandons the request -- the scoring result is discarded with it, so
//! partial rankings are never observable.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::info;

use graph_store::GraphStore;
use recommender::{
    AttributeCriteria, AttributeStrategy, CollaborativeStrategy, ContentStrategy, RankedMovie,
    RecommendError,
};

/// Failures a ranking request can surface to the caller.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid criteria or an upstream store failure (see `RecommendError`)
    #[error(transparent)]
    Recommend(#[from] RecommendError),

    /// The blocking scoring task panicked or was cancelled
    #[error("scoring task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Async facade over the three scoring strategies.
///
/// Holds an explicitly injected store handle -- there is no process-wide
/// connection state anywhere in the engine.
#[derive(Clone)]
pub struct RecommendationEngine {
    collaborative: CollaborativeStrategy,
    content: ContentStrategy,
    attributes: AttributeStrategy,
}

impl RecommendationEngine {
    /// Create an engine with all strategies bound to one store handle.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            collaborative: CollaborativeStrategy::new(store.clone()),
            content: ContentStrategy::new(store.clone()),
            attributes: AttributeStrategy::new(store),
        }
    }

    /// Configure the collaborative strategy's high-rating threshold
    /// (default: 4.0)
    pub fn with_min_rating(mut self, threshold: f32) -> Self {
        self.collaborative = self.collaborative.with_min_rating(threshold);
        self
    }

    /// Movies rated highly by users who rated the liked titles highly.
    pub async fn recommend_by_user_similarity(
        &self,
        liked_titles: Vec<String>,
        amount: usize,
    ) -> Result<Vec<RankedMovie>, EngineError> {
        let start = Instant::now();
        let strategy = self.collaborative.clone();
        let results =
            tokio::task::spawn_blocking(move || strategy.recommend(&liked_titles, amount)).await??;
        info!(
            "User-similarity ranking produced {} results in {:.2?}",
            results.len(),
            start.elapsed()
        );
        Ok(results)
    }

    /// Movies sharing genres, directors and actors with the seed titles.
    pub async fn recommend_by_content(
        &self,
        seed_titles: Vec<String>,
        amount: usize,
    ) -> Result<Vec<RankedMovie>, EngineError> {
        let start = Instant::now();
        let strategy = self.content.clone();
        let results =
            tokio::task::spawn_blocking(move || strategy.recommend(&seed_titles, amount)).await??;
        info!(
            "Content ranking produced {} results in {:.2?}",
            results.len(),
            start.elapsed()
        );
        Ok(results)
    }

    /// The whole catalog scored against explicit attribute criteria.
    pub async fn recommend_by_attributes(
        &self,
        criteria: AttributeCriteria,
        amount: usize,
    ) -> Result<Vec<RankedMovie>, EngineError> {
        let start = Instant::now();
        let strategy = self.attributes.clone();
        let results =
            tokio::task::spawn_blocking(move || strategy.recommend(&criteria, amount)).await??;
        info!(
            "Attribute ranking produced {} results in {:.2?}",
            results.len(),
            start.elapsed()
        );
        Ok(results)
    }
}
