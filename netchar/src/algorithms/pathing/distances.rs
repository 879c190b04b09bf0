//! # Unweighted shortest-path distances
//!
//! Breadth-first distances from one source and the mean over all pairs, following the
//! convention that unreachable pairs sit at `+inf`.
use crate::db::graph::Graph;
use netchar_api::core::entities::VID;
use rayon::prelude::*;
use std::collections::VecDeque;

/// Hop distance from `source` to every node, `None` where the node is unreachable.
pub fn single_source_distances(graph: &Graph, source: VID) -> Vec<Option<usize>> {
    let mut dist: Vec<Option<usize>> = vec![None; graph.count_nodes()];
    let mut queue = VecDeque::from([source]);
    dist[source.index()] = Some(0);

    while let Some(v) = queue.pop_front() {
        let next = dist[v.index()].map(|d| d + 1);
        for nbr in graph.neighbours(v) {
            if dist[nbr.index()].is_none() {
                dist[nbr.index()] = next;
                queue.push_back(*nbr);
            }
        }
    }
    dist
}

/// Mean over all `n²` entries of the distance matrix, diagonal included.
///
/// Any disconnected pair makes the mean `+inf`, and a graph without nodes gives NaN.
pub fn mean_pairwise_distance(graph: &Graph) -> f64 {
    let n = graph.count_nodes();
    if n == 0 {
        return f64::NAN;
    }
    let row_sums: Vec<Option<u64>> = graph
        .nodes()
        .collect::<Vec<_>>()
        .par_iter()
        .map(|v| {
            single_source_distances(graph, *v)
                .into_iter()
                .try_fold(0u64, |acc, d| d.map(|d| acc + d as u64))
        })
        .collect();

    match row_sums.into_iter().sum::<Option<u64>>() {
        Some(total) => total as f64 / (n as f64 * n as f64),
        None => f64::INFINITY,
    }
}

#[cfg(test)]
mod distances_test {
    use super::*;

    fn path_graph(len: u64) -> Graph {
        let mut graph = Graph::new();
        for i in 1..len {
            graph.add_edge(i - 1, i);
        }
        graph
    }

    #[test]
    fn bfs_distances() {
        let mut graph = path_graph(4);
        graph.add_node(9);
        let dist = single_source_distances(&graph, VID(0));
        assert_eq!(dist, vec![Some(0), Some(1), Some(2), Some(3), None]);
    }

    #[test]
    fn path_graph_mean_is_closed_form() {
        for len in [2u64, 4, 7, 10] {
            let graph = path_graph(len);
            let l = len as f64;
            assert_eq!(mean_pairwise_distance(&graph), (l * l - 1.0) / (3.0 * l));
        }
    }

    #[test]
    fn disconnected_pairs_are_infinite() {
        let mut graph = path_graph(3);
        graph.add_edge(10, 11);
        assert_eq!(mean_pairwise_distance(&graph), f64::INFINITY);
        let from_start = single_source_distances(&graph, VID(0));
        assert_eq!(from_start[2], Some(2));
        assert_eq!(from_start[3], None);
        assert_eq!(single_source_distances(&graph, VID(4))[4], Some(0));
    }

    #[test]
    fn degenerate_graphs() {
        assert!(mean_pairwise_distance(&Graph::new()).is_nan());
        assert_eq!(mean_pairwise_distance(&Graph::with_nodes(1)), 0.0);
    }
}
