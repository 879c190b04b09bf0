//! Degree calculations for the entire graph.
//! The degree of a node is the number of edge endpoints attached to it, so a self-loop
//! counts twice and parallel edges count once each.
//!
//! This module provides the following degree calculations:
//! - max_degree - The maximum degree of any node in the graph.
//! - degree_sequence - The degree of every node.
//! - degree_distribution - How many nodes have each degree from zero to the maximum.
//! - shannon_entropy - Entropy in bits of the degree distribution.
//! - degree_std - Population standard deviation of the degree sequence.
//!
//! # Examples
//!
//! ```rust
//! use netchar::algorithms::metrics::degree::*;
//! use netchar::prelude::*;
//!
//! let mut g = Graph::new();
//! for (src, dst) in [(1, 2), (1, 3), (2, 1), (3, 2), (1, 4), (4, 5)] {
//!     g.add_edge(src, dst);
//! }
//!
//! assert_eq!(max_degree(&g), 4);
//! assert_eq!(degree_sequence(&g), vec![4, 3, 2, 2, 1]);
//! assert_eq!(degree_distribution(&g).unwrap().counts(), &[0, 1, 2, 1, 1]);
//! ```
use crate::{db::graph::Graph, errors::MeasureError};
use itertools::Itertools;

/// The maximum degree of any node in the graph, zero for a graph without nodes.
pub fn max_degree(graph: &Graph) -> usize {
    graph.nodes().map(|v| graph.degree(v)).max().unwrap_or(0)
}

/// The degree of every node, in internal index order.
pub fn degree_sequence(graph: &Graph) -> Vec<usize> {
    graph.nodes().map(|v| graph.degree(v)).collect()
}

/// Node counts per degree, covering every degree from zero to the maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeDistribution {
    counts: Vec<usize>,
    num_nodes: usize,
}

impl DegreeDistribution {
    /// `counts()[k]` is the number of nodes of degree `k`.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn max_degree(&self) -> usize {
        self.counts.len() - 1
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Relative frequency of each degree.
    pub fn probabilities(&self) -> impl Iterator<Item = f64> + '_ {
        let n = self.num_nodes as f64;
        self.counts.iter().map(move |c| *c as f64 / n)
    }

    /// `-Σ p log₂ p` over the degrees with a non-zero count.
    pub fn entropy(&self) -> f64 {
        -self
            .probabilities()
            .filter(|p| *p > 0.0)
            .map(|p| p * p.log2())
            .sum::<f64>()
    }
}

/// Histogram of the degree sequence.
///
/// # Errors
///
/// [MeasureError::EmptyGraph] when the graph has no nodes.
pub fn degree_distribution(graph: &Graph) -> Result<DegreeDistribution, MeasureError> {
    if graph.is_empty() {
        return Err(MeasureError::EmptyGraph {
            measure: "degree distribution",
        });
    }
    let mut counts = vec![0; max_degree(graph) + 1];
    for (degree, count) in degree_sequence(graph).into_iter().counts() {
        counts[degree] = count;
    }
    Ok(DegreeDistribution {
        counts,
        num_nodes: graph.count_nodes(),
    })
}

/// Shannon entropy, in bits, of the degree distribution.
pub fn shannon_entropy(graph: &Graph) -> Result<f64, MeasureError> {
    degree_distribution(graph)
        .map(|dist| dist.entropy())
        .map_err(|_| MeasureError::EmptyGraph {
            measure: "shannon entropy",
        })
}

/// Population standard deviation of the degree sequence.
pub fn degree_std(graph: &Graph) -> Result<f64, MeasureError> {
    if graph.is_empty() {
        return Err(MeasureError::EmptyGraph {
            measure: "degree variance",
        });
    }
    let degrees = degree_sequence(graph);
    let n = degrees.len() as f64;
    let mean = degrees.iter().sum::<usize>() as f64 / n;
    let variance = degrees
        .iter()
        .map(|d| (*d as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    Ok(variance.sqrt())
}
