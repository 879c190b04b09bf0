use crate::{expected, fixtures, graph_from};
use approx::assert_relative_eq;
use netchar::{
    algorithms::{
        metrics::{
            assortativity::degree_assortativity,
            clustering_coefficient::{transitivity, TransitivityMode},
            degree::{degree_distribution, degree_std, shannon_entropy},
        },
        pathing::distances::mean_pairwise_distance,
    },
    graph_loader::example::karate_club::karate_club_graph,
    prelude::*,
};
use proptest::prelude::*;

const TRANSITIVITY: [(&str, f64); 7] = [
    ("karate", 0.2556818181818182),
    ("triangle", 1.0),
    ("path4", 0.0),
    ("star4", 0.0),
    ("k4", 1.0),
    ("cycle5", 0.0),
    ("bowtie", 0.6),
];

const DEGREE_STD: [(&str, f64); 7] = [
    ("karate", 3.8203606779128276),
    ("triangle", 0.0),
    ("path4", 0.5),
    ("star4", 0.8660254037844386),
    ("k4", 0.0),
    ("cycle5", 0.0),
    ("bowtie", 0.8),
];

#[test]
fn test_transitivity() {
    for (name, graph) in fixtures() {
        assert_relative_eq!(
            transitivity(&graph, TransitivityMode::Zero),
            expected(&TRANSITIVITY, name),
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_degree_std() {
    for (name, graph) in fixtures() {
        assert_relative_eq!(
            degree_std(&graph).unwrap(),
            expected(&DEGREE_STD, name),
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_karate_distances_and_mixing() {
    let graph = karate_club_graph();
    assert_relative_eq!(
        mean_pairwise_distance(&graph),
        2.337370242214533,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        degree_assortativity(&graph),
        -0.47561309768461435,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        shannon_entropy(&graph).unwrap(),
        2.857222096667174,
        max_relative = 1e-12
    );
}

#[test]
fn test_complete_graph_properties() {
    for n in 3..8u64 {
        let edges: Vec<(u64, u64)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();
        let graph = graph_from(&edges);
        let nf = n as f64;
        assert_eq!(transitivity(&graph, TransitivityMode::Zero), 1.0);
        assert_relative_eq!(mean_pairwise_distance(&graph), (nf - 1.0) / nf);
        assert!(degree_assortativity(&graph).is_nan());
    }
}

#[test]
fn test_isolated_nodes() {
    let graph = Graph::with_nodes(6);
    assert_eq!(transitivity(&graph, TransitivityMode::Zero), 0.0);
    assert_eq!(degree_std(&graph).unwrap(), 0.0);
    assert_eq!(shannon_entropy(&graph).unwrap(), 0.0);
    assert_eq!(degree_distribution(&graph).unwrap().counts(), &[6]);
}

proptest! {
    #[test]
    fn degree_probabilities_sum_to_one(edges in prop::collection::vec((0u64..30, 0u64..30), 1..120)) {
        let graph = graph_from(&edges);
        let total: f64 = degree_distribution(&graph).unwrap().probabilities().sum();
        prop_assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn transitivity_is_a_ratio(edges in prop::collection::vec((0u64..20, 0u64..20), 0..80)) {
        let graph = graph_from(&edges);
        let value = transitivity(&graph, TransitivityMode::Zero);
        prop_assert!((0.0..=1.0).contains(&value));
    }
}
