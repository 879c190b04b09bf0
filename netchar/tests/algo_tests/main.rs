use netchar::{graph_loader::example::karate_club::karate_club_graph, prelude::*};

mod centrality;
mod metrics;

pub fn graph_from(edges: &[(u64, u64)]) -> Graph {
    let mut graph = Graph::new();
    for (src, dst) in edges {
        graph.add_edge(*src, *dst);
    }
    graph
}

/// Small reference graphs, each with a name used in assertion messages.
pub fn fixtures() -> Vec<(&'static str, Graph)> {
    vec![
        ("karate", karate_club_graph()),
        ("triangle", graph_from(&[(0, 1), (1, 2), (2, 0)])),
        ("path4", graph_from(&[(0, 1), (1, 2), (2, 3)])),
        ("star4", graph_from(&[(0, 1), (0, 2), (0, 3)])),
        (
            "k4",
            graph_from(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]),
        ),
        (
            "cycle5",
            graph_from(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]),
        ),
        (
            "bowtie",
            graph_from(&[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (2, 4)]),
        ),
    ]
}

/// Look up the expected value of a fixture in a golden table.
pub fn expected(table: &[(&str, f64)], name: &str) -> f64 {
    table
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
        .unwrap_or_else(|| panic!("no golden value for {name}"))
}
