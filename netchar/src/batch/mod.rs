//! Characterise every graph file in a directory.
//!
//! Each entry of the directory is loaded as an edge list, summarised, and dropped before the
//! next one is read. Rows appear in the order the operating system lists the entries.

pub mod result_table;

pub use result_table::ResultTable;

use crate::{
    config::app_config::AppConfig,
    errors::GraphError,
    summary::{measure_row::MeasureRow, GraphSummarizer},
};
use kdam::{Bar, BarBuilder, BarExt};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::Path,
    str::FromStr,
};
use tracing::{debug, info, warn};

/// What to do when a file cannot be loaded or summarised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Record the failure and carry on with the next file.
    Skip,
}

impl Display for FailurePolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            other => Err(format!(
                "unknown failure policy {other:?}, expected 'abort' or 'skip'"
            )),
        }
    }
}

/// A file that was skipped under [FailurePolicy::Skip].
#[derive(Debug)]
pub struct BatchFailure {
    pub file: String,
    pub error: GraphError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub table: ResultTable,
    pub failures: Vec<BatchFailure>,
}

fn build_progress_bar(des: String, num_files: usize) -> Result<Bar, GraphError> {
    BarBuilder::default()
        .desc(des)
        .animation(kdam::Animation::FillUp)
        .total(num_files)
        .unit_scale(true)
        .build()
        .map_err(|_| GraphError::TqdmError)
}

fn characterise(path: &Path, file: &str, config: &AppConfig) -> Result<MeasureRow, GraphError> {
    let summary = GraphSummarizer::load(path, &config.loader, config.measures.clone())?;
    debug!(
        file,
        nodes = summary.size(),
        edges = summary.graph().count_edges(),
        "characterising network"
    );
    summary
        .measure_row()
        .map_err(|source| GraphError::measure(file, source))
}

/// Summarise every file in `network_directory`.
///
/// An empty directory gives an empty table.
///
/// # Errors
///
/// [GraphError::ReadDir] if the directory cannot be listed. Under [FailurePolicy::Abort] also
/// the first load or measure failure; under [FailurePolicy::Skip] those are collected in
/// [BatchReport::failures] instead.
pub fn compute_network_measures<P: AsRef<Path>>(
    network_directory: P,
    config: &AppConfig,
) -> Result<BatchReport, GraphError> {
    let dir = network_directory.as_ref();
    let read_dir_err = |source| GraphError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let entries = fs::read_dir(dir)
        .map_err(read_dir_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_dir_err)?;
    info!(
        directory = %dir.display(),
        files = entries.len(),
        policy = %config.batch.failure_policy,
        "computing network measures"
    );

    let mut pb = if config.batch.progress {
        Some(build_progress_bar("Networks".to_string(), entries.len())?)
    } else {
        None
    };

    let mut report = BatchReport::default();
    for entry in entries {
        let file = entry.file_name().to_string_lossy().into_owned();
        match characterise(&entry.path(), &file, config) {
            Ok(row) => report.table.insert(file, row),
            Err(error) => match config.batch.failure_policy {
                FailurePolicy::Abort => return Err(error),
                FailurePolicy::Skip => {
                    warn!(file = %file, %error, "skipping network");
                    report.failures.push(BatchFailure { file, error });
                }
            },
        }
        if let Some(pb) = pb.as_mut() {
            let _ = pb.update(1);
        }
    }

    info!(
        rows = report.table.len(),
        skipped = report.failures.len(),
        "finished computing network measures"
    );
    Ok(report)
}

#[cfg(test)]
mod batch_test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn policy_from_str() {
        assert_eq!("Skip".parse(), Ok(FailurePolicy::Skip));
        assert_eq!("abort".parse(), Ok(FailurePolicy::Abort));
        assert!("retry".parse::<FailurePolicy>().is_err());
        assert_eq!(FailurePolicy::default().to_string(), "abort");
    }

    #[test]
    fn missing_directory() {
        let err = compute_network_measures("/definitely/not/a/dir", &AppConfig::default())
            .unwrap_err();
        assert!(matches!(err, GraphError::ReadDir { .. }));
    }
}
