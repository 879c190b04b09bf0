use crate::{algorithms::algorithm_result::AlgorithmResult, db::graph::Graph};
use netchar_api::core::entities::VID;
use std::collections::VecDeque;

/// Computes the betweenness centrality for nodes in a given graph.
///
/// Brandes' algorithm over unweighted shortest paths. Each unordered pair of endpoints is
/// counted once, and parallel edges count as distinct shortest paths.
///
/// # Arguments
///
/// - `g`: A reference to the graph.
/// - `normalized`: If `true` divide by the number of pairs excluding the node itself,
///   `(n - 1)(n - 2) / 2`.
///
/// # Returns
///
/// An [AlgorithmResult] containing the betweenness centrality of each node.
pub fn betweenness_centrality(g: &Graph, normalized: bool) -> AlgorithmResult<'_, f64> {
    let n = g.count_nodes();
    let mut betweenness: Vec<f64> = vec![0.0; n];

    let mut stack: Vec<VID> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<VID>> = vec![vec![]; n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut dist: Vec<i64> = vec![-1; n];
    let mut delta: Vec<f64> = vec![0.0; n];
    let mut queue = VecDeque::new();

    for source in g.nodes() {
        stack.clear();
        predecessors.iter_mut().for_each(|p| p.clear());
        sigma.fill(0.0);
        dist.fill(-1);
        delta.fill(0.0);

        dist[source.index()] = 0;
        sigma[source.index()] = 1.0;
        queue.push_back(source);

        // BFS loop to find shortest paths.
        while let Some(current) = queue.pop_front() {
            stack.push(current);
            for neighbor in g.neighbours(current) {
                // Path discovery
                if dist[neighbor.index()] < 0 {
                    queue.push_back(*neighbor);
                    dist[neighbor.index()] = dist[current.index()] + 1;
                }
                // Path counting
                if dist[neighbor.index()] == dist[current.index()] + 1 {
                    sigma[neighbor.index()] += sigma[current.index()];
                    predecessors[neighbor.index()].push(current);
                }
            }
        }

        // Accumulation
        while let Some(w) = stack.pop() {
            for v in &predecessors[w.index()] {
                let coeff = (sigma[v.index()] / sigma[w.index()]) * (1.0 + delta[w.index()]);
                delta[v.index()] += coeff;
            }
            if w != source {
                betweenness[w.index()] += delta[w.index()];
            }
        }
    }

    // every pair was seen from both ends
    for value in betweenness.iter_mut() {
        *value /= 2.0;
    }

    // Normalization
    if normalized && n > 2 {
        let factor = 2.0 / ((n as f64 - 1.0) * (n as f64 - 2.0));
        for value in betweenness.iter_mut() {
            *value *= factor;
        }
    }

    AlgorithmResult::new(g, "Betweenness Centrality", "f64", betweenness)
}
