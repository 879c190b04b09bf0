use crate::algorithms::{
    centrality::{
        current_flow::approximate_betweenness::{DEFAULT_EPSILON, DEFAULT_KMAX},
        eigenvector::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE},
    },
    metrics::clustering_coefficient::TransitivityMode,
};
use serde::{Deserialize, Serialize};

/// Parameters of the statistics in a measure row.
#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct MeasureConfig {
    /// Clustering coefficient of a graph without connected triples.
    pub transitivity_mode: TransitivityMode,
    pub eigenvector_max_iterations: usize,
    pub eigenvector_tolerance: f64,
    pub current_flow_normalized: bool,
    /// Error bound of the approximate current-flow betweenness.
    pub current_flow_epsilon: f64,
    /// Largest number of source/target pairs the approximation may sample.
    pub current_flow_kmax: usize,
    /// Seed for the sampled pairs; unseeded runs are not reproducible.
    pub seed: Option<u64>,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            transitivity_mode: TransitivityMode::Zero,
            eigenvector_max_iterations: DEFAULT_MAX_ITERATIONS,
            eigenvector_tolerance: DEFAULT_TOLERANCE,
            current_flow_normalized: true,
            current_flow_epsilon: DEFAULT_EPSILON,
            current_flow_kmax: DEFAULT_KMAX,
            seed: None,
        }
    }
}
