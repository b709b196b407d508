//! Result types shared by all scoring strategies.

use graph_store::Movie;
use serde::Serialize;

/// A recommended movie with its explainable score.
///
/// All scores are integer sums of count/binary components, so ordering is
/// total and ties resolve deterministically. `voters` is populated by the
/// collaborative strategy only (distinct contributing users); the other
/// strategies leave it at 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMovie {
    pub title: String,
    pub year: u16,
    pub runtime: u32,
    pub language: String,
    pub release_date: String,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
    pub score: u32,
    pub voters: u32,
}

impl RankedMovie {
    /// Build a ranked record from a movie and its relationship lists.
    pub(crate) fn from_movie(
        movie: Movie,
        genres: Vec<String>,
        directors: Vec<String>,
        actors: Vec<String>,
        score: u32,
        voters: u32,
    ) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
            runtime: movie.runtime,
            language: movie.language,
            release_date: movie.release_date,
            genres,
            directors,
            actors,
            score,
            voters,
        }
    }
}
