use super::{check_connected, GroundedLaplacian};
use crate::{
    algorithms::algorithm_result::AlgorithmResult, db::graph::Graph, errors::MeasureError,
};
use rayon::prelude::*;

const MEASURE: &str = "information centrality";

/// Information centrality (current-flow closeness) of every node.
///
/// The score of `x` is `1 / Σ_w R(x, w)`, where `R` is the effective resistance between two
/// nodes when each pair of adjacent nodes is joined by one unit resistor. Parallel edges are
/// collapsed and self-loops carry no current.
///
/// # Errors
///
/// - [MeasureError::TooFewNodes] for a graph with fewer than two nodes.
/// - [MeasureError::NotConnected] when some pair of nodes has no path between them.
pub fn information_centrality(g: &Graph) -> Result<AlgorithmResult<'_, f64>, MeasureError> {
    check_connected(g, MEASURE, 2)?;
    let n = g.count_nodes();
    let laplacian = GroundedLaplacian::new(g, MEASURE)?;

    // column x of the inverse grounded Laplacian, padded with the grounded node
    let columns: Vec<(f64, f64)> = (0..n)
        .into_par_iter()
        .map(|x| {
            if x == 0 {
                return (0.0, 0.0);
            }
            let mut unit = vec![0.0; n];
            unit[x] = 1.0;
            let column = laplacian.solve(&unit);
            (column[x], column.iter().sum::<f64>())
        })
        .collect();

    // R(x, w) = C[x][x] + C[w][w] - 2 C[x][w]
    let trace: f64 = columns.iter().map(|(diag, _)| diag).sum();
    let values = columns
        .iter()
        .map(|(diag, row_sum)| 1.0 / (n as f64 * diag + trace - 2.0 * row_sum))
        .collect();

    Ok(AlgorithmResult::new(
        g,
        "Information Centrality",
        "f64",
        values,
    ))
}

#[cfg(test)]
mod information_centrality_test {
    use super::*;
    use approx::assert_relative_eq;

    fn load_graph(edges: &[(u64, u64)]) -> Graph {
        let mut graph = Graph::new();
        for (src, dst) in edges {
            graph.add_edge(*src, *dst);
        }
        graph
    }

    #[test]
    fn triangle() {
        let graph = load_graph(&[(0, 1), (1, 2), (2, 0)]);
        let result = information_centrality(&graph).unwrap();
        for value in result.values() {
            assert_relative_eq!(*value, 0.75, max_relative = 1e-12);
        }
    }

    #[test]
    fn path_and_star() {
        let path = load_graph(&[(0, 1), (1, 2), (2, 3)]);
        let result = information_centrality(&path).unwrap();
        // resistances along a path are hop counts
        assert_relative_eq!(*result.get(0).unwrap(), 1.0 / 6.0, max_relative = 1e-12);
        assert_relative_eq!(*result.get(1).unwrap(), 0.25, max_relative = 1e-12);
        assert_relative_eq!(result.mean(), 0.20833333333333337, max_relative = 1e-12);

        let star = load_graph(&[(0, 1), (0, 2), (0, 3)]);
        let result = information_centrality(&star).unwrap();
        assert_relative_eq!(result.mean(), 0.23333333333333334, max_relative = 1e-12);
    }

    #[test]
    fn parallel_edges_and_loops_are_collapsed() {
        let multi = load_graph(&[(0, 1), (0, 1), (1, 2), (2, 2)]);
        let simple = load_graph(&[(0, 1), (1, 2)]);
        let result = information_centrality(&multi).unwrap();
        assert_eq!(result.values(), information_centrality(&simple).unwrap().values());
        assert_relative_eq!(result.mean(), 7.0 / 18.0, max_relative = 1e-12);
    }

    #[test]
    fn requires_connected_graph() {
        let graph = load_graph(&[(0, 1), (2, 3)]);
        assert_eq!(
            information_centrality(&graph).unwrap_err(),
            MeasureError::NotConnected { measure: MEASURE }
        );
        assert!(matches!(
            information_centrality(&Graph::with_nodes(1)),
            Err(MeasureError::TooFewNodes { required: 2, .. })
        ));
    }
}
