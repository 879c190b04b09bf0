use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netchar::algorithms::{
    centrality::{
        betweenness::betweenness_centrality,
        closeness_centrality::closeness_centrality,
        current_flow::{
            approximate_betweenness::approximate_current_flow_betweenness,
            information_centrality::information_centrality,
        },
        eigenvector::eigenvector_centrality,
    },
    metrics::{
        assortativity::degree_assortativity,
        clustering_coefficient::{transitivity, TransitivityMode},
    },
    pathing::distances::mean_pairwise_distance,
};
use netchar_benchmark::common::{bench, bootstrap_graph};

pub fn graphgen_clustering_coeff(c: &mut Criterion) {
    let mut group = c.benchmark_group("transitivity");
    for size in [1_000, 10_000] {
        let graph = bootstrap_graph(size, 4);
        bench(&mut group, "transitivity", Some(size), |b| {
            b.iter(|| black_box(transitivity(&graph, TransitivityMode::Zero)))
        });
    }
    group.finish();
}

pub fn shortest_path_measures(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    group.sample_size(10);
    let graph = bootstrap_graph(1_000, 4);
    bench(&mut group, "closeness", None, |b| {
        b.iter(|| black_box(closeness_centrality(&graph).mean()))
    });
    bench(&mut group, "betweenness", None, |b| {
        b.iter(|| black_box(betweenness_centrality(&graph, false).mean()))
    });
    bench(&mut group, "mean_pairwise_distance", None, |b| {
        b.iter(|| black_box(mean_pairwise_distance(&graph)))
    });
    group.finish();
}

pub fn spectral_measures(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral");
    group.sample_size(10);
    let graph = bootstrap_graph(500, 4);
    bench(&mut group, "eigenvector", None, |b| {
        b.iter(|| black_box(eigenvector_centrality(&graph, None, None).unwrap().mean()))
    });
    bench(&mut group, "assortativity", None, |b| {
        b.iter(|| black_box(degree_assortativity(&graph)))
    });
    bench(&mut group, "information_centrality", None, |b| {
        b.iter(|| black_box(information_centrality(&graph).unwrap().mean()))
    });
    bench(&mut group, "approximate_current_flow_betweenness", None, |b| {
        b.iter(|| {
            black_box(
                approximate_current_flow_betweenness(&graph, true, 0.5, 10000, Some(1))
                    .unwrap()
                    .mean(),
            )
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    graphgen_clustering_coeff,
    shortest_path_measures,
    spectral_measures
);
criterion_main!(benches);
