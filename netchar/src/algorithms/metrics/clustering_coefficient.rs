//! Global clustering coefficient (transitivity) of an undirected graph.
//!
//! The ratio of closed connected triples to all connected triples, i.e.
//! `3 × triangles / connected triples`. Edge multiplicities and self-loops are ignored.
//!
//! # Examples
//!
//! ```rust
//! use netchar::algorithms::metrics::clustering_coefficient::{transitivity, TransitivityMode};
//! use netchar::prelude::*;
//!
//! let mut g = Graph::new();
//! for (src, dst) in [(1, 2), (2, 3), (3, 1), (3, 4)] {
//!     g.add_edge(src, dst);
//! }
//! assert_eq!(transitivity(&g, TransitivityMode::Zero), 0.6);
//! ```

use crate::db::graph::Graph;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// What to report when the graph has no connected triples at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitivityMode {
    /// Report `0.0`.
    #[default]
    Zero,
    /// Report `NaN`.
    Nan,
}

/// Global transitivity of `graph`.
pub fn transitivity(graph: &Graph, mode: TransitivityMode) -> f64 {
    let simple: Vec<_> = graph
        .nodes()
        .collect::<Vec<_>>()
        .par_iter()
        .map(|v| graph.simple_neighbours(*v))
        .collect();

    let (closed, triples) = simple
        .par_iter()
        .enumerate()
        .map(|(v, neighbours)| {
            let degree = neighbours.len() as u64;
            let triples = degree * degree.saturating_sub(1) / 2;
            // each edge among v's neighbours closes one triple centred on v
            let links: usize = neighbours
                .iter()
                .map(|u| {
                    simple[u.index()]
                        .iter()
                        .filter(|w| w.index() != v && neighbours.binary_search(w).is_ok())
                        .count()
                })
                .sum();
            (links as u64 / 2, triples)
        })
        .reduce(|| (0u64, 0u64), |(c1, t1), (c2, t2)| (c1 + c2, t1 + t2));

    if triples == 0 {
        return match mode {
            TransitivityMode::Zero => 0.0,
            TransitivityMode::Nan => f64::NAN,
        };
    }
    closed as f64 / triples as f64
}
