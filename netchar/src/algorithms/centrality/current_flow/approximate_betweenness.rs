//! Randomised estimate of current-flow betweenness.
//!
//! Current-flow betweenness counts, for every source/target pair, how much of a unit current
//! sent from source to target passes through each node. The exact value needs a solve for
//! every pair; this estimate samples `k` random pairs instead, with `k` chosen so the
//! absolute error is at most `epsilon` with high probability
//! (Brandes & Fleischer, "Centrality measures based on current flow", 2005).
use super::{check_connected, GroundedLaplacian};
use crate::{
    algorithms::algorithm_result::AlgorithmResult, db::graph::Graph, errors::MeasureError,
    graphgen::seeded_rng,
};
use rand::seq::index;
use tracing::debug;

const MEASURE: &str = "approximate current-flow betweenness";

pub const DEFAULT_EPSILON: f64 = 0.5;
pub const DEFAULT_KMAX: usize = 10000;

/// Number of source/target pairs needed for an error bound of `epsilon` on `n` nodes.
pub fn sample_count(n: usize, epsilon: f64) -> usize {
    let n = n as f64;
    let cstar = n * (n - 1.0) / ((n - 1.0) * (n - 2.0));
    ((cstar / epsilon).powi(2) * n.ln()).ceil() as usize
}

/// Approximate current-flow betweenness of every node.
///
/// # Arguments
///
/// - `g`: A reference to the graph.
/// - `normalized`: If `false` scale the scores up by `(n - 1)(n - 2) / 2`.
/// - `epsilon`: Absolute error bound of the estimate.
/// - `kmax`: Largest number of sampled pairs allowed.
/// - `seed`: Seed for drawing the pairs, `None` draws one from the OS.
///
/// # Errors
///
/// - [MeasureError::TooFewNodes] for a graph with fewer than three nodes.
/// - [MeasureError::NotConnected] when the graph is not connected.
/// - [MeasureError::SampleLimit] when `epsilon` needs more than `kmax` pairs.
pub fn approximate_current_flow_betweenness(
    g: &Graph,
    normalized: bool,
    epsilon: f64,
    kmax: usize,
    seed: Option<u64>,
) -> Result<AlgorithmResult<'_, f64>, MeasureError> {
    check_connected(g, MEASURE, 3)?;
    let n = g.count_nodes();
    let nb = (n as f64 - 1.0) * (n as f64 - 2.0);
    let cstar = n as f64 * (n as f64 - 1.0) / nb;
    let k = sample_count(n, epsilon);
    if k > kmax {
        return Err(MeasureError::SampleLimit { k, kmax });
    }
    debug!(nodes = n, samples = k, "sampling current-flow pairs");

    let laplacian = GroundedLaplacian::new(g, MEASURE)?;
    let mut rng = seeded_rng(seed);
    let cstar2k = cstar / (2.0 * k as f64);
    let mut betweenness = vec![0.0; n];
    let mut currents = vec![0.0; n];

    for _ in 0..k {
        let pair = index::sample(&mut rng, n, 2);
        let (s, t) = (pair.index(0), pair.index(1));
        currents.fill(0.0);
        currents[s] = 1.0;
        currents[t] = -1.0;
        let p = laplacian.solve(&currents);

        for v in g.nodes() {
            if v.index() == s || v.index() == t {
                continue;
            }
            for nbr in g.neighbours(v) {
                betweenness[v.index()] += (p[v.index()] - p[nbr.index()]).abs() * cstar2k;
            }
        }
    }

    if !normalized {
        let factor = nb / 2.0;
        betweenness.iter_mut().for_each(|b| *b *= factor);
    }

    Ok(AlgorithmResult::new(
        g,
        "Approximate Current Flow Betweenness",
        "f64",
        betweenness,
    ))
}
