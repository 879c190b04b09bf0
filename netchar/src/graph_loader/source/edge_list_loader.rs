//! Module containing the loader for plain-text edge lists.
//!
//! Each non-blank line holds one undirected edge as two whitespace-separated node tokens.
//!
//! # Example
//! ```no_run
//! use netchar::graph_loader::source::edge_list_loader::{EdgeListFormat, EdgeListLoader};
//!
//! let graph = EdgeListLoader::new("/path/to/network.txt")
//!     .set_format(EdgeListFormat::Labelled)
//!     .load()
//!     .expect("Edge list did not parse.");
//! println!("{} nodes, {} edges", graph.count_nodes(), graph.count_edges());
//! ```

use crate::{db::graph::Graph, errors::LoadError};
use netchar_api::core::entities::VID;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::debug;

/// How node tokens are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeListFormat {
    /// Tokens are non-negative integer node ids. The graph holds every id from `0` up to the
    /// largest one seen, so ids that never appear in an edge become isolated nodes.
    #[default]
    Indexed,
    /// Tokens are arbitrary labels. Nodes are created in order of first appearance.
    Labelled,
}

impl Display for EdgeListFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EdgeListFormat::Indexed => write!(f, "indexed"),
            EdgeListFormat::Labelled => write!(f, "labelled"),
        }
    }
}

impl FromStr for EdgeListFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "indexed" => Ok(EdgeListFormat::Indexed),
            "labelled" | "labeled" => Ok(EdgeListFormat::Labelled),
            other => Err(format!(
                "unknown edge list format {other:?}, expected 'indexed' or 'labelled'"
            )),
        }
    }
}

/// A loader for a single edge-list file with configurable options.
#[derive(Debug, Clone)]
pub struct EdgeListLoader {
    /// Path of the edge-list file.
    path: PathBuf,
    /// How node tokens are interpreted.
    format: EdgeListFormat,
}

impl EdgeListLoader {
    /// Creates a new `EdgeListLoader` for the given file, reading [EdgeListFormat::Indexed].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use netchar::graph_loader::source::edge_list_loader::EdgeListLoader;
    /// let loader = EdgeListLoader::new("/path/to/network.txt");
    /// ```
    pub fn new<P: Into<PathBuf>>(p: P) -> Self {
        Self {
            path: p.into(),
            format: EdgeListFormat::default(),
        }
    }

    /// Sets how node tokens are interpreted.
    pub fn set_format(mut self, format: EdgeListFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file into a new graph.
    ///
    /// # Errors
    ///
    /// [LoadError::Io] if the file cannot be read, [LoadError::MalformedLine] if a line does
    /// not hold exactly two tokens and [LoadError::InvalidNodeId] if an indexed token is not a
    /// non-negative integer.
    pub fn load(&self) -> Result<Graph, LoadError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let graph = self.parse(&contents)?;
        debug!(
            path = %self.path.display(),
            format = %self.format,
            nodes = graph.count_nodes(),
            edges = graph.count_edges(),
            "loaded edge list"
        );
        Ok(graph)
    }

    /// Parse edge-list text that was read from this loader's path.
    pub fn parse(&self, contents: &str) -> Result<Graph, LoadError> {
        match self.format {
            EdgeListFormat::Indexed => self.parse_indexed(contents),
            EdgeListFormat::Labelled => self.parse_labelled(contents),
        }
    }

    fn parse_indexed(&self, contents: &str) -> Result<Graph, LoadError> {
        let mut pairs = vec![];
        let mut max_id: Option<usize> = None;
        for edge in self.edge_tokens(contents) {
            let (line, src, dst) = edge?;
            let src = self.parse_id(line, src)?;
            let dst = self.parse_id(line, dst)?;
            max_id = max_id.max(Some(src.max(dst)));
            pairs.push((VID(src), VID(dst)));
        }

        let mut graph = Graph::with_nodes(max_id.map_or(0, |id| id + 1));
        for (src, dst) in pairs {
            graph.add_edge_internal(src, dst);
        }
        Ok(graph)
    }

    fn parse_labelled(&self, contents: &str) -> Result<Graph, LoadError> {
        let mut graph = Graph::new();
        for edge in self.edge_tokens(contents) {
            let (_, src, dst) = edge?;
            graph.add_edge(src, dst);
        }
        Ok(graph)
    }

    fn parse_id(&self, line: usize, token: &str) -> Result<usize, LoadError> {
        token.parse::<usize>().map_err(|_| LoadError::InvalidNodeId {
            path: self.path.clone(),
            line,
            token: token.to_owned(),
        })
    }

    /// Yields `(line number, src token, dst token)` for each non-blank line.
    fn edge_tokens<'a>(
        &'a self,
        contents: &'a str,
    ) -> impl Iterator<Item = Result<(usize, &'a str, &'a str), LoadError>> + 'a {
        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(move |(idx, line)| {
                let mut tokens = line.split_whitespace();
                match (tokens.next(), tokens.next(), tokens.next()) {
                    (Some(src), Some(dst), None) => Ok((idx + 1, src, dst)),
                    _ => Err(LoadError::MalformedLine {
                        path: self.path.clone(),
                        line: idx + 1,
                        found: line.trim().to_owned(),
                    }),
                }
            })
    }
}
