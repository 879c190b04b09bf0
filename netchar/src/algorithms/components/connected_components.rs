use crate::{algorithms::algorithm_result::AlgorithmResult, db::graph::Graph};
use std::collections::VecDeque;

/// Connected components of an undirected graph.
///
/// # Returns
///
/// An [AlgorithmResult] mapping every node to the smallest internal index in its component.
pub fn connected_components(graph: &Graph) -> AlgorithmResult<'_, usize> {
    let n = graph.count_nodes();
    let mut component = vec![usize::MAX; n];
    let mut queue = VecDeque::new();

    for root in graph.nodes() {
        if component[root.index()] != usize::MAX {
            continue;
        }
        component[root.index()] = root.index();
        queue.push_back(root);
        while let Some(v) = queue.pop_front() {
            for nbr in graph.neighbours(v) {
                if component[nbr.index()] == usize::MAX {
                    component[nbr.index()] = root.index();
                    queue.push_back(*nbr);
                }
            }
        }
    }

    AlgorithmResult::new(graph, "Connected Components", "usize", component)
}

/// Number of connected components. Zero for a graph without nodes.
pub fn count_components(graph: &Graph) -> usize {
    connected_components(graph)
        .values()
        .iter()
        .enumerate()
        .filter(|(v, c)| *v == **c)
        .count()
}

/// Whether every node can reach every other node. A graph without nodes is not connected.
pub fn is_connected(graph: &Graph) -> bool {
    count_components(graph) == 1
}
