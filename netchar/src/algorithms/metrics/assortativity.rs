//! Degree assortativity: the Pearson correlation of the degrees found at either end of an
//! edge. Positive values mean hubs link to hubs, negative values mean hubs link to leaves.
use crate::db::graph::Graph;

/// Degree assortativity coefficient of an undirected graph.
///
/// Every edge is counted in both orientations, using the full degree of each endpoint.
/// Returns NaN when the coefficient is undefined: a graph without edges, or one where every
/// edge joins nodes of the same degree.
pub fn degree_assortativity(graph: &Graph) -> f64 {
    let m = graph.count_edges() as f64;
    let (mut products, mut sums, mut squares) = (0.0, 0.0, 0.0);
    for (src, dst) in graph.edges() {
        let a = graph.degree(*src) as f64;
        let b = graph.degree(*dst) as f64;
        products += a * b;
        sums += a + b;
        squares += a * a + b * b;
    }
    let num1 = products / m;
    let num2 = (sums / (2.0 * m)).powi(2);
    let den1 = squares / (2.0 * m);
    (num1 - num2) / (den1 - num2)
}
