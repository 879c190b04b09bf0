//! Eigenvector centrality by power iteration.
//!
//! A node is central when its neighbours are central: the scores form the principal
//! eigenvector of the adjacency matrix, scaled so that the highest score is exactly one.
//!
//! # Examples
//!
//! ```rust
//! use netchar::algorithms::centrality::eigenvector::eigenvector_centrality;
//! use netchar::prelude::*;
//!
//! let mut g = Graph::new();
//! for (src, dst) in [(1, 2), (2, 3), (3, 1)] {
//!     g.add_edge(src, dst);
//! }
//! let result = eigenvector_centrality(&g, None, None).unwrap();
//! assert_eq!(result.values(), &[1.0, 1.0, 1.0]);
//! ```
use crate::{
    algorithms::algorithm_result::AlgorithmResult, db::graph::Graph, errors::MeasureError,
};
use rayon::prelude::*;

pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Eigenvector centrality of every node.
///
/// Iterates `x ← (A + I) x` starting from the degree vector and rescales by the maximum after
/// each step. Adding the identity keeps bipartite graphs from oscillating without changing the
/// eigenvector. A graph without edges scores one everywhere; isolated nodes in a graph with
/// edges score zero.
///
/// # Arguments
///
/// - `g`: A reference to the graph.
/// - `iter_count`: Maximum number of iterations, [DEFAULT_MAX_ITERATIONS] if `None`.
/// - `tol`: Stop once no score moves by more than this, [DEFAULT_TOLERANCE] if `None`.
///
/// # Errors
///
/// [MeasureError::NoConvergence] when the scores are still moving after `iter_count` steps.
pub fn eigenvector_centrality(
    g: &Graph,
    iter_count: Option<usize>,
    tol: Option<f64>,
) -> Result<AlgorithmResult<'_, f64>, MeasureError> {
    let iter_count = iter_count.unwrap_or(DEFAULT_MAX_ITERATIONS);
    let tol = tol.unwrap_or(DEFAULT_TOLERANCE);
    let nodes: Vec<_> = g.nodes().collect();

    if g.count_edges() == 0 {
        return Ok(AlgorithmResult::new(
            g,
            "Eigenvector Centrality",
            "f64",
            vec![1.0; nodes.len()],
        ));
    }

    let mut scores: Vec<f64> = nodes.iter().map(|v| g.degree(*v) as f64).collect();
    for _ in 0..iter_count {
        let mut next: Vec<f64> = nodes
            .par_iter()
            .map(|v| {
                scores[v.index()]
                    + g.neighbours(*v)
                        .iter()
                        .map(|u| scores[u.index()])
                        .sum::<f64>()
            })
            .collect();
        let max = next.iter().copied().fold(0.0, f64::max);
        next.iter_mut().for_each(|x| *x /= max);

        let max_diff = next
            .iter()
            .zip(&scores)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        scores = next;
        if max_diff < tol {
            return Ok(AlgorithmResult::new(
                g,
                "Eigenvector Centrality",
                "f64",
                scores,
            ));
        }
    }

    Err(MeasureError::NoConvergence {
        measure: "eigenvector centrality",
        iterations: iter_count,
    })
}
