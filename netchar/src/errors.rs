use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to read edge list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed edge on line {line} of {path}: expected two node ids, found {found:?}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        found: String,
    },
    #[error("Invalid node id {token:?} on line {line} of {path}: expected a non-negative integer")]
    InvalidNodeId {
        path: PathBuf,
        line: usize,
        token: String,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("{measure} is undefined for a graph without nodes")]
    EmptyGraph { measure: &'static str },
    #[error("{measure} requires a connected graph")]
    NotConnected { measure: &'static str },
    #[error("{measure} requires at least {required} nodes, the graph has {actual}")]
    TooFewNodes {
        measure: &'static str,
        required: usize,
        actual: usize,
    },
    #[error("{measure} did not converge within {iterations} iterations")]
    NoConvergence {
        measure: &'static str,
        iterations: usize,
    },
    #[error("Number of random pairs k > kmax ({k} > {kmax}), increase kmax or epsilon")]
    SampleLimit { k: usize, kmax: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to characterise {file}: {source}")]
    Measure {
        file: String,
        #[source]
        source: MeasureError,
    },

    #[error("Failed to list network directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to write result table: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO operation failed")]
    IOError {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to build progress bar")]
    TqdmError,
}

impl GraphError {
    pub fn measure(file: impl Into<String>, source: MeasureError) -> Self {
        GraphError::Measure {
            file: file.into(),
            source,
        }
    }
}
