//! Loaders that turn files (or bundled datasets) into a [Graph](crate::db::graph::Graph).
//!
//! `source` holds the edge-list reader used for every network file; `example` holds small
//! bundled graphs with well-known statistics.

pub mod example;
pub mod source;
