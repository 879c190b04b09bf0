use crate::graph_loader::source::edge_list_loader::{EdgeListFormat, EdgeListLoader};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize, Default)]
pub struct LoaderConfig {
    pub format: EdgeListFormat,
}

impl LoaderConfig {
    pub fn loader<P: Into<PathBuf>>(&self, path: P) -> EdgeListLoader {
        EdgeListLoader::new(path).set_format(self.format)
    }
}
