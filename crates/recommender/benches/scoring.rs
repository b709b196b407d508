//! Benchmarks for the three scoring strategies.
//!
//! Run with: cargo bench --package recommender
//!
//! The graph is generated synthetically so the bench needs no data files:
//! 2000 movies spread over 20 genres, 200 directors and 1000 actors, with
//! 500 users rating 40 movies each.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use graph_store::{GraphStore, MemoryGraph, Movie};
use recommender::{AttributeCriteria, AttributeStrategy, CollaborativeStrategy, ContentStrategy};
use std::sync::Arc;

const MOVIES: u32 = 2000;
const USERS: u32 = 500;
const RATINGS_PER_USER: u32 = 40;

fn build_bench_graph() -> Arc<dyn GraphStore> {
    let mut graph = MemoryGraph::new();

    for i in 0..MOVIES {
        let title = format!("Movie {i:04}");
        graph.insert_movie(Movie {
            title: title.clone(),
            year: 1970 + (i % 55) as u16,
            runtime: 80 + (i % 120),
            language: if i % 7 == 0 { "fr" } else { "en" }.to_string(),
            release_date: format!("{}-06-01", 1970 + (i % 55)),
        });
        graph.link_genre(&title, &format!("Genre {}", i % 20));
        graph.link_genre(&title, &format!("Genre {}", (i / 3) % 20));
        graph.link_director(&title, &format!("Director {}", i % 200));
        graph.link_actor(&format!("Actor {}", i % 1000), &title);
        graph.link_actor(&format!("Actor {}", (i * 7) % 1000), &title);
    }

    for u in 0..USERS {
        let user = format!("user{u:03}");
        for k in 0..RATINGS_PER_USER {
            // Deterministic spread with a bias towards low movie ids, so
            // popular titles exist
            let movie = (u * 13 + k * k) % MOVIES;
            let rating = 1.0 + ((u + k * 3) % 9) as f32 / 2.0;
            graph.insert_rating(&user, &format!("Movie {movie:04}"), rating);
        }
    }

    Arc::new(graph)
}

fn bench_collaborative(c: &mut Criterion) {
    let store = build_bench_graph();
    let strategy = CollaborativeStrategy::new(store);
    let liked: Vec<String> = (0..5).map(|i| format!("Movie {i:04}")).collect();

    c.bench_function("collaborative_recommend", |b| {
        b.iter(|| {
            let results = strategy.recommend(black_box(&liked), black_box(20));
            black_box(results)
        })
    });
}

fn bench_content(c: &mut Criterion) {
    let store = build_bench_graph();
    let strategy = ContentStrategy::new(store);
    let seeds: Vec<String> = (0..3).map(|i| format!("Movie {i:04}")).collect();

    c.bench_function("content_recommend", |b| {
        b.iter(|| {
            let results = strategy.recommend(black_box(&seeds), black_box(20));
            black_box(results)
        })
    });
}

fn bench_attributes(c: &mut Criterion) {
    let store = build_bench_graph();
    let strategy = AttributeStrategy::new(store);
    let criteria = AttributeCriteria::new()
        .with_genres(["Genre 3", "Genre 7"])
        .with_runtime(90, 150)
        .with_languages(["en"])
        .with_decades([1990, 2000]);

    c.bench_function("attribute_recommend", |b| {
        b.iter(|| {
            let results = strategy.recommend(black_box(&criteria), black_box(20));
            black_box(results)
        })
    });
}

criterion_group!(benches, bench_collaborative, bench_content, bench_attributes);
criterion_main!(benches);
