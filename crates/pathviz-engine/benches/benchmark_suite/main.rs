//! Benchmark suite for pathviz-engine.
//!
//! Covers the four pathfinding runs and Kruskal on grid presets and seeded
//! random geometric graphs. Graph sizes stay at editor scale (hundreds to
//! low thousands of nodes): Dijkstra and A* re-sort their frontier on every
//! extraction to keep insertion-order tie-breaking.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package pathviz-engine
//!
//! # Run one group
//! cargo bench --package pathviz-engine -- kruskal
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

mod config;
mod generators;


criterion_group!(
    name = traversal_bench_group;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets = traversal_benches::bench_pathfinding, traversal_benches::bench_step_iteration
);

criterion_group!(
    name = mst_bench_group;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(3));
    targets = mst_benches::bench_kruskal
);

criterion_main!(traversal_bench_group, mst_bench_group);
