use crate::db::graph::Graph;
use netchar_api::core::entities::{GID, VID};
use std::collections::HashMap;

/// An 'AlgorithmRepr' struct that represents the string output in the terminal after running an algorithm.
///
/// It returns the algorithm name, number of nodes in the graph, and the result type.
///
#[derive(Debug, Clone)]
pub struct AlgorithmRepr {
    pub algo_name: String,
    pub result_type: String,
}

/// A generic `AlgorithmResult` struct that represents the per-node result of an algorithm
/// computation.
///
/// Values are stored densely, one per node, indexed by the node's [VID].
#[derive(Debug)]
pub struct AlgorithmResult<'graph, V> {
    pub algo_repr: AlgorithmRepr,
    pub graph: &'graph Graph,
    pub result: Vec<V>,
}

impl<'graph, V: Clone> AlgorithmResult<'graph, V> {
    /// Creates a new instance of `AlgorithmResult` with the provided values.
    ///
    /// Arguments:
    ///
    /// * `graph`: The graph the algorithm ran on
    /// * `algo_name`: The name of the algorithm.
    /// * `result_type`: The type of the result.
    /// * `result`: One value per node, in [VID] order.
    pub fn new(graph: &'graph Graph, algo_name: &str, result_type: &str, result: Vec<V>) -> Self {
        debug_assert_eq!(graph.count_nodes(), result.len());
        Self {
            algo_repr: AlgorithmRepr {
                algo_name: algo_name.to_string(),
                result_type: result_type.to_string(),
            },
            graph,
            result,
        }
    }

    /// Returns a formatted string representation of the algorithm.
    pub fn repr(&self) -> String {
        format!(
            "Algorithm Name: {}, Number of Nodes: {}, Result Type: {}",
            &self.algo_repr.algo_name,
            &self.result.len(),
            &self.algo_repr.result_type
        )
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Returns the value for the node with the given label.
    pub fn get<T: Into<GID>>(&self, node: T) -> Option<&V> {
        let vid = self.graph.node(node)?;
        self.result.get(vid.index())
    }

    pub fn get_by_vid(&self, v: VID) -> Option<&V> {
        self.result.get(v.index())
    }

    pub fn values(&self) -> &[V] {
        &self.result
    }

    /// Returns a hashmap with node names and values
    pub fn to_hashmap(&self) -> HashMap<String, V> {
        self.graph
            .nodes()
            .map(|v| (self.graph.node_name(v), self.result[v.index()].clone()))
            .collect()
    }
}

impl AlgorithmResult<'_, f64> {
    /// Arithmetic mean over all nodes.
    ///
    /// NaN for a graph without nodes; a NaN or infinite value propagates into the mean.
    pub fn mean(&self) -> f64 {
        mean(&self.result)
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod algorithm_result_test {
    use super::*;

    #[test]
    fn lookup_by_label() {
        let mut g = Graph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        let result = AlgorithmResult::new(&g, "Degree", "usize", vec![1usize, 2, 1]);
        assert_eq!(result.get("b"), Some(&2));
        assert_eq!(result.get("z"), None);
        assert_eq!(result.to_hashmap().get("c"), Some(&1));
        assert_eq!(
            result.repr(),
            "Algorithm Name: Degree, Number of Nodes: 3, Result Type: usize"
        );
    }

    #[test]
    fn mean_propagates_non_finite_values() {
        let g = Graph::with_nodes(3);
        let result = AlgorithmResult::new(&g, "x", "f64", vec![1.0, 2.0, 6.0]);
        assert_eq!(result.mean(), 3.0);

        let result = AlgorithmResult::new(&g, "x", "f64", vec![1.0, f64::NAN, 6.0]);
        assert!(result.mean().is_nan());

        let result = AlgorithmResult::new(&g, "x", "f64", vec![1.0, f64::INFINITY, 6.0]);
        assert_eq!(result.mean(), f64::INFINITY);

        let empty = Graph::new();
        let result = AlgorithmResult::new(&empty, "x", "f64", vec![]);
        assert!(result.mean().is_nan());
    }
}
