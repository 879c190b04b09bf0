use crate::db::graph::Graph;

// Zachary's 78 friendship ties between the 34 club members, by member index.
#[rustfmt::skip]
const KARATE_CLUB_EDGES: [(u64, u64); 78] = [
    (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8), (0, 10), (0, 11), (0, 12),
    (0, 13), (0, 17), (0, 19), (0, 21), (0, 31), (1, 2), (1, 3), (1, 7), (1, 13), (1, 17),
    (1, 19), (1, 21), (1, 30), (2, 3), (2, 7), (2, 8), (2, 9), (2, 13), (2, 27), (2, 28),
    (2, 32), (3, 7), (3, 12), (3, 13), (4, 6), (4, 10), (5, 6), (5, 10), (5, 16), (6, 16),
    (8, 30), (8, 32), (8, 33), (9, 33), (13, 33), (14, 32), (14, 33), (15, 32), (15, 33),
    (18, 32), (18, 33), (19, 33), (20, 32), (20, 33), (22, 32), (22, 33), (23, 25), (23, 27),
    (23, 29), (23, 32), (23, 33), (24, 25), (24, 27), (24, 31), (25, 31), (26, 29), (26, 33),
    (27, 33), (28, 31), (28, 33), (29, 32), (29, 33), (30, 32), (30, 33), (31, 32), (31, 33),
    (32, 33),
];

/// `karate_club_graph` constructs a karate club graph.
///
/// This function uses the Zachary's karate club dataset to create
/// a graph object. Nodes represent members of the club, and edges
/// represent friendships observed between them outside the club.
///
/// BACKGROUND These are data collected from the members of a university karate club by Wayne
/// Zachary. The ZACHE matrix represents the presence or absence of ties among the members of the
/// club.
///
/// Zachary (1977) used these data and an information flow model of network conflict resolution
/// to explain the split-up of this group following disputes among the members.
///
/// REFERENCE
///   Zachary W. (1977). An information flow model for conflict and fission in small groups.
///   Journal of Anthropological Research, 33, 452-473.
///
/// Returns:
///     A `Graph` whose node `i` has label `i` and internal index `i`.
pub fn karate_club_graph() -> Graph {
    let mut graph = Graph::with_nodes(34);
    for (src, dst) in KARATE_CLUB_EDGES {
        graph.add_edge(src, dst);
    }
    graph
}

#[cfg(test)]
mod karate_test {
    use super::*;

    #[test]
    fn test_graph_sizes() {
        let g = karate_club_graph();
        assert_eq!(g.count_nodes(), 34);
        assert_eq!(g.count_edges(), 78);
        assert_eq!(g.nodes().map(|v| g.degree(v)).max(), Some(17));
    }
}
