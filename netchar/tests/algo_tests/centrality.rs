use crate::{expected, fixtures, graph_from};
use approx::assert_relative_eq;
use netchar::{
    algorithms::centrality::{
        betweenness::betweenness_centrality,
        closeness_centrality::closeness_centrality,
        current_flow::{
            approximate_betweenness::approximate_current_flow_betweenness,
            information_centrality::information_centrality,
        },
        eigenvector::eigenvector_centrality,
    },
    graph_loader::example::karate_club::karate_club_graph,
    prelude::*,
};

const CLOSENESS: [(&str, f64); 7] = [
    ("karate", 0.42647963257352345),
    ("triangle", 1.0),
    ("path4", 0.625),
    ("star4", 0.7),
    ("k4", 1.0),
    ("cycle5", 0.6666666666666666),
    ("bowtie", 0.7333333333333332),
];

const BETWEENNESS: [(&str, f64); 7] = [
    ("karate", 23.235294117647058),
    ("triangle", 0.0),
    ("path4", 1.0),
    ("star4", 0.75),
    ("k4", 0.0),
    ("cycle5", 1.0),
    ("bowtie", 0.8),
];

const EIGENVECTOR: [(&str, f64); 7] = [
    ("karate", 0.3921414795233258),
    ("triangle", 1.0),
    ("path4", 0.809016994374947),
    ("star4", 0.6830127018922203),
    ("k4", 1.0),
    ("cycle5", 1.0),
    ("bowtie", 0.7123105625617656),
];

const INFORMATION: [(&str, f64); 7] = [
    ("karate", 0.0385048699834122),
    ("triangle", 0.75),
    ("path4", 0.20833333333333337),
    ("star4", 0.23333333333333334),
    ("k4", 0.6666666666666666),
    ("cycle5", 0.25),
    ("bowtie", 0.275),
];

#[test]
fn test_closeness_centrality() {
    for (name, graph) in fixtures() {
        let mean = closeness_centrality(&graph).mean();
        assert_relative_eq!(mean, expected(&CLOSENESS, name), max_relative = 1e-12);
    }
}

#[test]
fn test_betweenness_centrality() {
    for (name, graph) in fixtures() {
        let mean = betweenness_centrality(&graph, false).mean();
        assert_relative_eq!(
            mean,
            expected(&BETWEENNESS, name),
            epsilon = 1e-12,
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_eigenvector_centrality() {
    for (name, graph) in fixtures() {
        let mean = eigenvector_centrality(&graph, None, None).unwrap().mean();
        assert_relative_eq!(mean, expected(&EIGENVECTOR, name), max_relative = 1e-8);
    }
}

#[test]
fn test_information_centrality() {
    for (name, graph) in fixtures() {
        let mean = information_centrality(&graph).unwrap().mean();
        assert_relative_eq!(mean, expected(&INFORMATION, name), max_relative = 1e-9);
    }
}

#[test]
fn test_karate_betweenness_hubs() {
    let graph = karate_club_graph();
    let result = betweenness_centrality(&graph, false);
    assert_relative_eq!(*result.get(0).unwrap(), 231.0714285714286, max_relative = 1e-12);
    assert_relative_eq!(*result.get(33).unwrap(), 160.5515873015873, max_relative = 1e-12);
}

#[test]
fn test_approximate_current_flow_on_karate() {
    let graph = karate_club_graph();
    let first = approximate_current_flow_betweenness(&graph, true, 0.5, 10000, Some(3)).unwrap();
    let second = approximate_current_flow_betweenness(&graph, true, 0.5, 10000, Some(3)).unwrap();
    assert_eq!(first.values(), second.values());
    assert!(first.values().iter().all(|v| v.is_finite() && *v >= 0.0));
    assert!(first.mean() > 0.0);
}

#[test]
fn test_current_flow_requires_connected_graph() {
    let graph = graph_from(&[(0, 1), (1, 2), (3, 4)]);
    assert!(matches!(
        information_centrality(&graph),
        Err(MeasureError::NotConnected { .. })
    ));
    assert!(matches!(
        approximate_current_flow_betweenness(&graph, true, 0.5, 10000, None),
        Err(MeasureError::NotConnected { .. })
    ));
}
