//! Current-flow (electrical network) centralities.
//!
//! Every pair of adjacent nodes is joined by one unit resistor. Both measures solve Kirchhoff's
//! equations on the Laplacian with node `0` grounded, which leaves a symmetric positive definite
//! system when the graph is connected. The system is factorised once with faer's dense Cholesky
//! decomposition and reused for every right-hand side.

pub mod approximate_betweenness;
pub mod information_centrality;

use crate::{
    algorithms::components::connected_components::is_connected, db::graph::Graph,
    errors::MeasureError,
};
use faer::{
    linalg::solvers::{Llt, Solve},
    Mat, Side,
};

/// Fail unless `graph` is connected with at least `min_nodes` nodes.
pub(crate) fn check_connected(
    graph: &Graph,
    measure: &'static str,
    min_nodes: usize,
) -> Result<(), MeasureError> {
    let n = graph.count_nodes();
    if n < min_nodes {
        return Err(MeasureError::TooFewNodes {
            measure,
            required: min_nodes,
            actual: n,
        });
    }
    if !is_connected(graph) {
        return Err(MeasureError::NotConnected { measure });
    }
    Ok(())
}

/// Cholesky factor of the graph Laplacian with the row and column of node `0` removed.
pub(crate) struct GroundedLaplacian {
    n: usize,
    llt: Llt<f64>,
}

impl GroundedLaplacian {
    /// Factorise the grounded Laplacian of a non-empty graph.
    ///
    /// Each pair of distinct adjacent nodes is joined by one unit resistor, however many
    /// parallel edges the graph holds between them. Self-loops are ignored. The factorisation
    /// fails only when some node has no path to node `0`.
    pub(crate) fn new(graph: &Graph, measure: &'static str) -> Result<Self, MeasureError> {
        let n = graph.count_nodes();
        let m = n.saturating_sub(1);
        let mut laplacian = Mat::<f64>::zeros(m, m);
        for v in graph.nodes().filter(|v| v.index() > 0) {
            let row = v.index() - 1;
            for u in graph.simple_neighbours(v) {
                laplacian[(row, row)] += 1.0;
                if u.index() > 0 {
                    laplacian[(row, u.index() - 1)] -= 1.0;
                }
            }
        }

        let llt = laplacian
            .as_ref()
            .llt(Side::Lower)
            .map_err(|_| MeasureError::NotConnected { measure })?;
        Ok(Self { n, llt })
    }

    /// Node potentials for the injected currents `b` (one entry per node), with node `0`
    /// held at zero. The entry of `b` for node `0` is ignored.
    pub(crate) fn solve(&self, b: &[f64]) -> Vec<f64> {
        let m = self.n.saturating_sub(1);
        let rhs = Mat::<f64>::from_fn(m, 1, |i, _| b[i + 1]);
        let x = self.llt.solve(rhs.as_ref());

        let mut potentials = Vec::with_capacity(self.n);
        if self.n > 0 {
            potentials.push(0.0);
        }
        potentials.extend((0..m).map(|i| x[(i, 0)]));
        potentials
    }
}
