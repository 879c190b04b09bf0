//! The in-memory undirected graph every statistic runs on.
//!
//! Nodes carry an external label ([GID]) and a dense internal index ([VID]). Edges are kept
//! exactly as they were added: a duplicated edge is stored once per copy and a self-loop shows
//! up twice in its node's adjacency list, so it contributes two to the degree.
//!
//! # Examples
//!
//! ```rust
//! use netchar::prelude::*;
//!
//! let mut g = Graph::new();
//! g.add_edge(1, 2);
//! g.add_edge(2, 3);
//! g.add_edge(3, 3);
//!
//! assert_eq!(g.count_nodes(), 3);
//! assert_eq!(g.count_edges(), 3);
//! assert_eq!(g.degree(g.node(3).unwrap()), 3);
//! ```

use crate::errors::GraphError;
use netchar_api::core::entities::{EID, GID, VID};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

#[derive(Debug, Clone, Default)]
pub struct Graph {
    node_ids: Vec<GID>,
    logical_to_physical: FxHashMap<GID, VID>,
    adjacency: Vec<Vec<VID>>,
    edges: Vec<(VID, VID)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph holding the isolated nodes `0..num_nodes`, where node `i` has label
    /// `GID::U64(i)` and internal index `VID(i)`.
    pub fn with_nodes(num_nodes: usize) -> Self {
        let mut graph = Self::new();
        for id in 0..num_nodes {
            graph.add_node(id as u64);
        }
        graph
    }

    /// Add a node if it does not exist yet and return its internal index.
    pub fn add_node<V: Into<GID>>(&mut self, id: V) -> VID {
        let gid = id.into();
        if let Some(vid) = self.logical_to_physical.get(&gid) {
            return *vid;
        }
        let vid = VID(self.node_ids.len());
        self.node_ids.push(gid.clone());
        self.logical_to_physical.insert(gid, vid);
        self.adjacency.push(vec![]);
        vid
    }

    /// Add an undirected edge, creating either endpoint on first sight.
    pub fn add_edge<V: Into<GID>, W: Into<GID>>(&mut self, src: V, dst: W) -> EID {
        let src = self.add_node(src);
        let dst = self.add_node(dst);
        self.add_edge_internal(src, dst)
    }

    /// Add an edge between two existing internal indices.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn add_edge_internal(&mut self, src: VID, dst: VID) -> EID {
        let eid = EID(self.edges.len());
        self.edges.push((src, dst));
        self.adjacency[src.index()].push(dst);
        self.adjacency[dst.index()].push(src);
        eid
    }

    pub fn count_nodes(&self) -> usize {
        self.node_ids.len()
    }

    pub fn count_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = VID> + '_ {
        (0..self.count_nodes()).map(VID)
    }

    pub fn edges(&self) -> &[(VID, VID)] {
        &self.edges
    }

    /// Look up the internal index of a node label.
    pub fn node<V: Into<GID>>(&self, id: V) -> Option<VID> {
        self.logical_to_physical.get(&id.into()).copied()
    }

    pub fn has_node<V: Into<GID>>(&self, id: V) -> bool {
        self.node(id).is_some()
    }

    pub fn node_id(&self, v: VID) -> &GID {
        &self.node_ids[v.index()]
    }

    pub fn node_name(&self, v: VID) -> String {
        self.node_ids[v.index()].to_string()
    }

    /// Neighbours of `v` with multiplicity; a self-loop lists `v` twice.
    pub fn neighbours(&self, v: VID) -> &[VID] {
        &self.adjacency[v.index()]
    }

    pub fn degree(&self, v: VID) -> usize {
        self.adjacency[v.index()].len()
    }

    /// Distinct neighbours of `v`, excluding `v` itself, in ascending order.
    pub fn simple_neighbours(&self, v: VID) -> Vec<VID> {
        let mut neighbours: Vec<VID> = self.adjacency[v.index()]
            .iter()
            .copied()
            .filter(|n| *n != v)
            .collect();
        neighbours.sort_unstable();
        neighbours.dedup();
        neighbours
    }

    pub fn has_edge(&self, src: VID, dst: VID) -> bool {
        let (from, target) = if self.degree(src) <= self.degree(dst) {
            (src, dst)
        } else {
            (dst, src)
        };
        self.adjacency[from.index()].contains(&target)
    }

    /// The simple graph spanned by the edges: parallel edges merged into one, each self-loop
    /// kept once, and only nodes that touch an edge, in order of first mention. Labels are
    /// carried over. A graph without edges is returned with all of its nodes.
    pub fn to_simple_graph(&self) -> Graph {
        if self.edges.is_empty() {
            return self.clone();
        }
        let mut simple = Graph::new();
        let mut seen: FxHashSet<(VID, VID)> = FxHashSet::default();
        for (src, dst) in &self.edges {
            let s = simple.add_node(self.node_id(*src));
            let d = simple.add_node(self.node_id(*dst));
            if seen.insert((*src.min(dst), *src.max(dst))) {
                simple.add_edge_internal(s, d);
            }
        }
        simple
    }

    /// Write the graph as an edge list that [EdgeListFormat::Indexed] can read back: one
    /// `src dst` pair of internal indices per line.
    ///
    /// [EdgeListFormat::Indexed]: crate::graph_loader::source::edge_list_loader::EdgeListFormat::Indexed
    pub fn save_edge_list<P: AsRef<Path>>(&self, path: P) -> Result<(), GraphError> {
        let mut writer = BufWriter::new(File::create(path)?);
        for (src, dst) in &self.edges {
            writeln!(writer, "{} {}", src.index(), dst.index())?;
        }
        writer.flush()?;
        Ok(())
    }
}
