//! # netchar
//!
//! `netchar` characterises undirected networks stored as plain edge lists. For every graph it
//! computes a fixed row of structural statistics:
//!
//! - global clustering coefficient (transitivity)
//! - mean closeness, betweenness, eigenvector and information centrality
//! - mean approximate current-flow betweenness
//! - mean pairwise shortest-path distance
//! - degree assortativity
//! - entropy and spread of the degree distribution
//! - node count
//!
//! and collects the rows of a whole directory of graphs into one table.
//!
//! ## Graph model
//!
//! A [Graph](db::graph::Graph) is an unweighted undirected multigraph. Parallel edges and
//! self-loops are kept exactly as they appear in the input.
//!
//! ## Example
//!
//! ```no_run
//! use netchar::prelude::*;
//!
//! let config = AppConfig::default();
//! let report = compute_network_measures("barabasi_linear", &config).unwrap();
//! println!("{}", report.table.head(config.batch.preview_rows));
//! ```
//!
//! A single graph can be summarised without going through a directory:
//!
//! ```rust
//! use netchar::graph_loader::example::karate_club::karate_club_graph;
//! use netchar::prelude::*;
//!
//! let summary = GraphSummarizer::new(karate_club_graph(), MeasureConfig::default());
//! assert_eq!(summary.size(), 34);
//! assert!(summary.assortativity() < 0.0);
//! ```

pub mod algorithms;
pub mod batch;
pub mod config;
pub mod db;
pub mod errors;
pub mod graph_loader;
pub mod graphgen;
pub mod summary;

pub mod prelude {
    pub use crate::{
        algorithms::metrics::clustering_coefficient::TransitivityMode,
        batch::{compute_network_measures, BatchReport, FailurePolicy, ResultTable},
        config::{
            app_config::{AppConfig, AppConfigBuilder},
            measure_config::MeasureConfig,
        },
        db::graph::Graph,
        errors::{GraphError, LoadError, MeasureError},
        graph_loader::source::edge_list_loader::{EdgeListFormat, EdgeListLoader},
        summary::{GraphSummarizer, Measure, MeasureRow},
    };
    pub use netchar_api::core::entities::{GID, VID};
}
