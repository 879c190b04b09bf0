//! Implementations of the graph algorithms behind every statistic.
//!
//! The algorithms are grouped into modules by what they measure. Per-node routines return an
//! [AlgorithmResult](algorithm_result::AlgorithmResult); whole-graph routines return a scalar.
//!
//! To run an algorithm simply import the module and call the function.
//!
//! # Examples
//!
//! ```rust
//! use netchar::algorithms::metrics::degree::max_degree;
//! use netchar::algorithms::centrality::closeness_centrality::closeness_centrality;
//! use netchar::prelude::*;
//!
//! let mut g = Graph::new();
//! for (src, dst) in [(1, 2), (1, 3), (2, 1), (3, 2), (1, 4), (4, 5)] {
//!     g.add_edge(src, dst);
//! }
//! println!("max_degree: {:?}", max_degree(&g));
//! println!("mean closeness: {:?}", closeness_centrality(&g).mean());
//! ```

pub mod algorithm_result;
pub mod centrality;
pub mod components;
pub mod metrics;
pub mod pathing;
