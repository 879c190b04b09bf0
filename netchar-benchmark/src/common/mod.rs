#![allow(dead_code)]

use criterion::{measurement::WallTime, Bencher, BenchmarkGroup, BenchmarkId};
use netchar::{graphgen::preferential_attachment::ba_preferential_attachment, prelude::*};
use netchar_api::core::utils::logging::global_info_logger;
use std::path::Path;
use tracing::info;

/// A seeded Barabási–Albert graph with `num_nodes` nodes.
pub fn bootstrap_graph(num_nodes: usize, edges_per_step: usize) -> Graph {
    let mut graph = Graph::new();
    ba_preferential_attachment(
        &mut graph,
        num_nodes.saturating_sub(edges_per_step),
        edges_per_step,
        Some(42),
    );
    graph
}

/// Write `count` seeded BA graphs into `dir`, one edge list per file.
pub fn bootstrap_directory(dir: &Path, count: usize, num_nodes: usize) {
    global_info_logger();
    for i in 0..count {
        let mut graph = Graph::new();
        ba_preferential_attachment(&mut graph, num_nodes - 2, 2, Some(i as u64));
        graph
            .save_edge_list(dir.join(format!("ba_{i}.txt")))
            .expect("Error: Unable to write edge list");
    }
    info!(count, num_nodes, "bootstrapped benchmark networks");
}

pub fn bench<F>(
    group: &mut BenchmarkGroup<WallTime>,
    name: &str,
    parameter: Option<usize>,
    mut task: F,
) where
    F: FnMut(&mut Bencher<'_, WallTime>),
{
    match parameter {
        Some(parameter) => group.bench_with_input(
            BenchmarkId::new(name, parameter),
            &parameter,
            |b: &mut Bencher, _| task(b),
        ),
        None => group.bench_function(name, task),
    };
}
