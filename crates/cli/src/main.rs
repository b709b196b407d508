use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::RecommendationEngine;
use graph_store::{GraphStore, dataset};
use recommender::{AttributeCriteria, RankedMovie, RelationshipAggregator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// CineGraph - graph-backed movie recommendations
#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(about = "Movie recommendations over a graph of ratings, genres and people", long_about = None)]
struct Cli {
    /// Path to the dataset JSON file
    #[arg(short, long, default_value = "data/movies.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies rated highly by users with similar taste
    Similar {
        /// A liked movie title (repeat the flag for several)
        #[arg(long = "liked", required = true)]
        liked: Vec<String>,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        amount: usize,

        /// Minimum rating for a title to count as liked
        #[arg(long, default_value = "4.0")]
        min_rating: f32,
    },

    /// Recommend movies similar in genre, director and cast to seed titles
    Content {
        /// A seed movie title (repeat the flag for several)
        #[arg(long = "seed", required = true)]
        seed: Vec<String>,

        #[arg(long, default_value = "10")]
        amount: usize,
    },

    /// Score every movie against attribute criteria
    Attributes {
        #[arg(long = "genre")]
        genres: Vec<String>,

        #[arg(long = "director")]
        directors: Vec<String>,

        #[arg(long = "actor")]
        actors: Vec<String>,

        /// Minimum runtime in minutes
        #[arg(long, default_value = "0")]
        runtime_min: u32,

        /// Maximum runtime in minutes
        #[arg(long, default_value = "300")]
        runtime_max: u32,

        #[arg(long = "language")]
        languages: Vec<String>,

        /// A release decade, e.g. 1990 (repeat the flag for several)
        #[arg(long = "decade")]
        decades: Vec<u16>,

        #[arg(long, default_value = "10")]
        amount: usize,
    },

    /// Show a movie and its relationships by exact title
    Movie {
        #[arg(long)]
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the dataset into the in-memory store
    println!("Loading dataset from {}...", cli.data.display());
    let start = Instant::now();
    let graph = dataset::load_from_json(&cli.data)
        .with_context(|| format!("Failed to load dataset from {}", cli.data.display()))?;
    let (movies, users, ratings) = graph.counts();
    println!(
        "{} Loaded {} movies, {} users, {} ratings in {:?}",
        "✓".green(),
        movies,
        users,
        ratings,
        start.elapsed()
    );

    let store: Arc<dyn GraphStore> = Arc::new(graph);

    // Dispatch to the command handler
    match cli.command {
        Commands::Similar {
            liked,
            amount,
            min_rating,
        } => handle_similar(store, liked, amount, min_rating).await?,
        Commands::Content { seed, amount } => handle_content(store, seed, amount).await?,
        Commands::Attributes {
            genres,
            directors,
            actors,
            runtime_min,
            runtime_max,
            languages,
            decades,
            amount,
        } => {
            let criteria = AttributeCriteria::new()
                .with_genres(genres)
                .with_directors(directors)
                .with_actors(actors)
                .with_runtime(runtime_min, runtime_max)
                .with_languages(languages)
                .with_decades(decades);
            handle_attributes(store, criteria, amount).await?
        }
        Commands::Movie { title } => handle_movie(store, title)?,
    }

    Ok(())
}

/// Handle the 'similar' command
async fn handle_similar(
    store: Arc<dyn GraphStore>,
    liked: Vec<String>,
    amount: usize,
    min_rating: f32,
) -> Result<()> {
    let engine = RecommendationEngine::new(store).with_min_rating(min_rating);
    let results = engine.recommend_by_user_similarity(liked, amount).await?;
    print_ranked("Similar-taste picks", &results, true);
    Ok(())
}

/// Handle the 'content' command
async fn handle_content(store: Arc<dyn GraphStore>, seed: Vec<String>, amount: usize) -> Result<()> {
    let engine = RecommendationEngine::new(store);
    let results = engine.recommend_by_content(seed, amount).await?;
    print_ranked("Content matches", &results, false);
    Ok(())
}

/// Handle the 'attributes' command
async fn handle_attributes(
    store: Arc<dyn GraphStore>,
    criteria: AttributeCriteria,
    amount: usize,
) -> Result<()> {
    let engine = RecommendationEngine::new(store);
    let results = engine.recommend_by_attributes(criteria, amount).await?;
    print_ranked("Attribute matches", &results, false);
    Ok(())
}

/// Handle the 'movie' command (exact-title lookup)
fn handle_movie(store: Arc<dyn GraphStore>, title: String) -> Result<()> {
    let aggregator = RelationshipAggregator::new(store);
    let movie = aggregator
        .movie(&title)?
        .ok_or_else(|| anyhow!("Movie \"{}\" not found", title))?;

    println!("{}", movie.title.bold().blue());
    println!("{}Year: {}", "• ".green(), movie.year);
    println!("{}Runtime: {} min", "• ".green(), movie.runtime);
    println!("{}Language: {}", "• ".green(), movie.language);
    println!("{}Released: {}", "• ".green(), movie.release_date);
    println!(
        "{}Genres: {}",
        "• ".cyan(),
        aggregator.genres_of(&title)?.join(", ")
    );
    println!(
        "{}Directors: {}",
        "• ".cyan(),
        aggregator.directors_of(&title)?.join(", ")
    );
    println!(
        "{}Actors: {}",
        "• ".cyan(),
        aggregator.actors_of(&title)?.join(", ")
    );
    Ok(())
}

/// Helper to format and print a ranked list
fn print_ranked(header: &str, results: &[RankedMovie], show_voters: bool) {
    println!("{}", format!("{header}:").bold().blue());
    if results.is_empty() {
        println!("  (no matches)");
        return;
    }
    for (i, movie) in results.iter().enumerate() {
        let rank = i + 1;
        println!(
            "{}. {} ({}) [{}] - Score: {}",
            rank.to_string().green(),
            movie.title,
            movie.year,
            movie.genres.join(", "),
            movie.score
        );
        if show_voters {
            println!("   Backed by {} similar user(s)", movie.voters);
        }
    }
}
