use crate::{
    algorithms::{algorithm_result::AlgorithmResult, pathing::distances::single_source_distances},
    db::graph::Graph,
};
use rayon::prelude::*;

/// Computes the closeness centrality of every node.
///
/// Only the nodes a source can reach take part in its score:
/// `(reached - 1) / Σ distances to the reached nodes`. On a disconnected graph every node is
/// scored within its own component, and an isolated node (which reaches nothing) scores NaN.
///
/// # Returns
///
/// An [AlgorithmResult] holding one closeness value per node.
pub fn closeness_centrality(graph: &Graph) -> AlgorithmResult<'_, f64> {
    let values: Vec<f64> = graph
        .nodes()
        .collect::<Vec<_>>()
        .par_iter()
        .map(|v| {
            let (reached, total) = single_source_distances(graph, *v)
                .into_iter()
                .flatten()
                .fold((0usize, 0usize), |(count, sum), d| (count + 1, sum + d));
            if total == 0 {
                f64::NAN
            } else {
                (reached - 1) as f64 / total as f64
            }
        })
        .collect();

    AlgorithmResult::new(graph, "Closeness Centrality", "f64", values)
}
