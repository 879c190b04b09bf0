//! This module contains the preferential attachment graph generation model.
//!
//! This function is a graph generation model based upon:
//! Barabási, Albert-László, and Réka Albert. "Emergence of scaling in random networks." science 286.5439 (1999): 509-512.
//! # Examples
//!
//! ```
//! use netchar::prelude::*;
//! use netchar::graphgen::preferential_attachment::ba_preferential_attachment;
//!
//! let mut graph = Graph::new();
//! ba_preferential_attachment(&mut graph, 1000, 10, Some(42));
//! assert_eq!(graph.count_nodes(), 1010);
//! ```

use crate::{db::graph::Graph, errors::GraphError, graphgen::seeded_rng};
use netchar_api::core::entities::VID;
use rand::prelude::*;
use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Generates a graph using the preferential attachment model.
///
/// Given a graph this function will add a user defined number of nodes, each with a user
/// defined number of edges.
/// This is an iterative algorithm where at each `step` a node is added and its neighbours are
/// chosen from the pool of nodes already within the network.
/// For this model the neighbours are chosen proportionally based upon their degree, favouring
/// nodes with higher degree (more connections).
/// This sampling is conducted without replacement.
///
/// **Note:**  If the provided graph doesnt have enough nodes/edges for the initial sample,
/// the min number of both will be added before generation begins.
///
/// # Arguments
/// * `graph` - The graph you wish to add nodes and edges to
/// * `nodes_to_add` - The amount of nodes you wish to add to the graph (steps)
/// * `edges_per_step` - The amount of edges a joining node should add to the graph
/// * `seed` - Seed for the random number generator, `None` draws one from the OS
pub fn ba_preferential_attachment(
    graph: &mut Graph,
    nodes_to_add: usize,
    edges_per_step: usize,
    seed: Option<u64>,
) {
    let mut rng = seeded_rng(seed);
    let mut ids: Vec<VID> = graph.nodes().collect();
    let mut degrees: Vec<usize> = ids.iter().map(|v| graph.degree(*v)).collect();
    let mut edge_count: usize = degrees.iter().sum();
    let mut next_id = graph.count_nodes() as u64;

    let mut fresh_node = |graph: &mut Graph| {
        while graph.has_node(next_id) {
            next_id += 1;
        }
        graph.add_node(next_id)
    };

    while ids.len() < edges_per_step {
        ids.push(fresh_node(graph));
        degrees.push(0);
    }

    if graph.count_edges() < edges_per_step {
        for pos in 1..ids.len() {
            graph.add_edge_internal(ids[pos], ids[pos - 1]);
            edge_count += 2;
            degrees[pos] += 1;
            degrees[pos - 1] += 1;
        }
    }

    for _ in 0..nodes_to_add {
        let node = fresh_node(graph);
        let mut normalisation = edge_count;
        let mut positions_to_skip: BTreeSet<usize> = BTreeSet::new();

        for _ in 0..edges_per_step {
            if normalisation == 0 {
                // only degree-zero candidates are left, fall back to a uniform pick
                let candidates: Vec<usize> = (0..ids.len())
                    .filter(|pos| !positions_to_skip.contains(pos))
                    .collect();
                if let Some(pos) = candidates.choose(&mut rng) {
                    positions_to_skip.insert(*pos);
                }
                continue;
            }
            let mut sum = 0;
            let rand_num = rng.gen_range(1..=normalisation);
            for pos in 0..ids.len() {
                if !positions_to_skip.contains(&pos) {
                    sum += degrees[pos];
                    if sum >= rand_num {
                        positions_to_skip.insert(pos);
                        normalisation -= degrees[pos];
                        break;
                    }
                }
            }
        }
        for pos in positions_to_skip.iter() {
            graph.add_edge_internal(node, ids[*pos]);
            degrees[*pos] += 1;
        }
        ids.push(node);
        degrees.push(positions_to_skip.len());
        edge_count += positions_to_skip.len() * 2;
    }
}

/// Write `count` independent preferential attachment graphs of `num_nodes` nodes each into
/// `dir` as `ba_<i>.txt` edge lists, creating the directory if needed.
///
/// Graph `i` is grown from `seed + i` when a seed is given.
pub fn ba_edge_list_directory<P: AsRef<Path>>(
    dir: P,
    count: usize,
    num_nodes: usize,
    edges_per_step: usize,
    seed: Option<u64>,
) -> Result<Vec<PathBuf>, GraphError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    (0..count)
        .map(|i| {
            let mut graph = Graph::new();
            ba_preferential_attachment(
                &mut graph,
                num_nodes.saturating_sub(edges_per_step),
                edges_per_step,
                seed.map(|s| s.wrapping_add(i as u64)),
            );
            let path = dir.join(format!("ba_{i}.txt"));
            graph.save_edge_list(&path)?;
            debug!(path = %path.display(), edges = graph.count_edges(), "wrote network");
            Ok(path)
        })
        .collect()
}
