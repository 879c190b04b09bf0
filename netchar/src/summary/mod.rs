//! Whole-graph summary statistics.
//!
//! A [GraphSummarizer] owns one loaded graph and computes each statistic on demand, or all of
//! them at once as a [MeasureRow].
//!
//! Two views of the graph are kept. Path, spectral and clustering statistics run on the graph as
//! loaded, including isolated nodes and parallel edges. Size, the degree statistics and both
//! current-flow measures run on [Graph::to_simple_graph]: only nodes that touch an edge, with
//! parallel edges merged.
//!
//! # Examples
//!
//! ```rust
//! use netchar::prelude::*;
//!
//! let mut g = Graph::new();
//! for (src, dst) in [(0, 1), (1, 2), (2, 0)] {
//!     g.add_edge(src, dst);
//! }
//! let summary = GraphSummarizer::new(g, MeasureConfig::default());
//! let row = summary.measure_row().unwrap();
//! assert_eq!(row.get(Measure::Size), Some(3.0));
//! assert_eq!(row.get(Measure::Clustering), Some(1.0));
//! ```

pub mod measure_row;

pub use measure_row::{Measure, MeasureRow};

use crate::{
    algorithms::{
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
            degree::{degree_distribution, degree_std, shannon_entropy, DegreeDistribution},
        },
        pathing::distances::mean_pairwise_distance,
    },
    config::{loader_config::LoaderConfig, measure_config::MeasureConfig},
    db::graph::Graph,
    errors::{LoadError, MeasureError},
};
use std::path::Path;
use tracing::debug;

pub struct GraphSummarizer {
    graph: Graph,
    simple: Graph,
    config: MeasureConfig,
}

impl GraphSummarizer {
    pub fn new(graph: Graph, config: MeasureConfig) -> Self {
        let simple = graph.to_simple_graph();
        Self {
            graph,
            simple,
            config,
        }
    }

    /// Load an edge-list file and wrap the resulting graph.
    pub fn load<P: AsRef<Path>>(
        path: P,
        loader: &LoaderConfig,
        config: MeasureConfig,
    ) -> Result<Self, LoadError> {
        let graph = loader.loader(path.as_ref()).load()?;
        Ok(Self::new(graph, config))
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The edge-spanned simple graph behind size, degree and current-flow statistics.
    pub fn simple_graph(&self) -> &Graph {
        &self.simple
    }

    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    /// Number of nodes that touch an edge, or of all nodes when there are no edges.
    pub fn size(&self) -> usize {
        self.simple.count_nodes()
    }

    pub fn clustering(&self, mode: TransitivityMode) -> f64 {
        transitivity(&self.graph, mode)
    }

    /// Mean closeness centrality. NaN as soon as one node is isolated.
    pub fn closeness(&self) -> f64 {
        closeness_centrality(&self.graph).mean()
    }

    /// Mean unnormalised betweenness centrality.
    pub fn betweenness(&self) -> f64 {
        betweenness_centrality(&self.graph, false).mean()
    }

    /// Mean over all ordered pairs of nodes, self-pairs included, of the hop distance.
    /// Infinite for a disconnected graph.
    pub fn mean_pairwise_distance(&self) -> f64 {
        mean_pairwise_distance(&self.graph)
    }

    pub fn eigenvector(&self) -> Result<f64, MeasureError> {
        let result = eigenvector_centrality(
            &self.graph,
            Some(self.config.eigenvector_max_iterations),
            Some(self.config.eigenvector_tolerance),
        )?;
        Ok(result.mean())
    }

    pub fn assortativity(&self) -> f64 {
        degree_assortativity(&self.graph)
    }

    pub fn information_centrality(&self) -> Result<f64, MeasureError> {
        Ok(information_centrality(&self.simple)?.mean())
    }

    pub fn approximate_current_flow_betweenness(&self) -> Result<f64, MeasureError> {
        let result = approximate_current_flow_betweenness(
            &self.simple,
            self.config.current_flow_normalized,
            self.config.current_flow_epsilon,
            self.config.current_flow_kmax,
            self.config.seed,
        )?;
        Ok(result.mean())
    }

    pub fn shannon_entropy(&self) -> Result<f64, MeasureError> {
        shannon_entropy(&self.simple)
    }

    /// Population standard deviation of the degree sequence.
    ///
    /// The name is kept for the column it fills; the value is not squared.
    pub fn degree_variance(&self) -> Result<f64, MeasureError> {
        degree_std(&self.simple)
    }

    pub fn degree_distribution(&self) -> Result<DegreeDistribution, MeasureError> {
        degree_distribution(&self.simple)
    }

    /// Every statistic, in column order.
    pub fn measure_row(&self) -> Result<MeasureRow, MeasureError> {
        let mut row = MeasureRow::new();
        for measure in Measure::ALL {
            let value = self.compute(measure)?;
            debug!(measure = %measure, value, "computed measure");
            row.insert(measure, value);
        }
        Ok(row)
    }

    /// A single statistic, with the configured parameters.
    pub fn compute(&self, measure: Measure) -> Result<f64, MeasureError> {
        match measure {
            Measure::Clustering => Ok(self.clustering(self.config.transitivity_mode)),
            Measure::Closeness => Ok(self.closeness()),
            Measure::Size => Ok(self.size() as f64),
            Measure::Betweenness => Ok(self.betweenness()),
            Measure::MeanPairwiseDistance => Ok(self.mean_pairwise_distance()),
            Measure::Eigenvector => self.eigenvector(),
            Measure::Assortativity => Ok(self.assortativity()),
            Measure::InformationCentrality => self.information_centrality(),
            Measure::ApproximateCurrentFlowBetweenness => {
                self.approximate_current_flow_betweenness()
            }
            Measure::ShannonEntropy => self.shannon_entropy(),
            Measure::DegreeVariance => self.degree_variance(),
        }
    }
}

#[cfg(test)]
mod summary_test {
    use super::*;
    use crate::graph_loader::source::edge_list_loader::EdgeListLoader;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn summarizer(edges: &[(u64, u64)]) -> GraphSummarizer {
        let mut graph = Graph::new();
        for (src, dst) in edges {
            graph.add_edge(*src, *dst);
        }
        GraphSummarizer::new(
            graph,
            MeasureConfig {
                seed: Some(1),
                ..Default::default()
            },
        )
    }

    #[test]
    fn row_has_every_column_in_order() {
        let summary = summarizer(&[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let row = summary.measure_row().unwrap();
        assert_eq!(row.measures().collect::<Vec<_>>(), Measure::ALL.to_vec());
        assert_eq!(row.get(Measure::Size), Some(4.0));
        assert_eq!(row.get(Measure::Clustering), Some(0.6));
    }

    #[test]
    fn disconnected_graph_fails_on_current_flow() {
        let summary = summarizer(&[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        assert_eq!(summary.mean_pairwise_distance(), f64::INFINITY);
        assert_eq!(
            summary.measure_row().unwrap_err(),
            MeasureError::NotConnected {
                measure: "information centrality"
            }
        );
    }

    #[test]
    fn one_indexed_ids_do_not_add_a_node() {
        let graph = EdgeListLoader::new("triangle.txt")
            .parse("1 2\n2 3\n3 1\n")
            .unwrap();
        assert_eq!(graph.count_nodes(), 4);

        let summary = GraphSummarizer::new(graph, MeasureConfig::default());
        assert_eq!(summary.size(), 3);
        assert!(summary.closeness().is_nan());
        assert_relative_eq!(summary.information_centrality().unwrap(), 0.75, max_relative = 1e-12);
        assert_eq!(summary.degree_variance().unwrap(), 0.0);
        assert!(summary.measure_row().is_ok());
    }

    #[test]
    fn degree_and_current_flow_statistics_merge_parallel_edges() {
        let summary = summarizer(&[(0, 1), (0, 1), (1, 2)]);
        assert_relative_eq!(
            summary.information_centrality().unwrap(),
            7.0 / 18.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            summary.shannon_entropy().unwrap(),
            0.9182958340544896,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            summary.degree_variance().unwrap(),
            0.4714045207910317,
            max_relative = 1e-12
        );
        assert_eq!(summary.degree_distribution().unwrap().counts(), &[0, 2, 1]);
        // the loaded graph still sees the doubled edge
        assert_eq!(summary.graph().degree(summary.graph().node(0).unwrap()), 2);
    }
}
