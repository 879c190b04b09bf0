use crate::{
    algorithms::metrics::clustering_coefficient::TransitivityMode,
    batch::FailurePolicy,
    config::{
        batch_config::BatchConfig, loader_config::LoaderConfig, log_config::LoggingConfig,
        measure_config::MeasureConfig,
    },
    graph_loader::source::edge_list_loader::EdgeListFormat,
};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize, Default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub loader: LoaderConfig,
    pub measures: MeasureConfig,
    pub batch: BatchConfig,
}

pub struct AppConfigBuilder {
    logging: LoggingConfig,
    loader: LoaderConfig,
    measures: MeasureConfig,
    batch: BatchConfig,
}

impl From<AppConfig> for AppConfigBuilder {
    fn from(config: AppConfig) -> Self {
        Self {
            logging: config.logging,
            loader: config.loader,
            measures: config.measures,
            batch: config.batch,
        }
    }
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfig::default().into()
    }

    pub fn with_log_level(mut self, log_level: String) -> Self {
        self.logging.log_level = log_level;
        self
    }

    pub fn with_format(mut self, format: EdgeListFormat) -> Self {
        self.loader.format = format;
        self
    }

    pub fn with_transitivity_mode(mut self, mode: TransitivityMode) -> Self {
        self.measures.transitivity_mode = mode;
        self
    }

    pub fn with_eigenvector_max_iterations(mut self, max_iterations: usize) -> Self {
        self.measures.eigenvector_max_iterations = max_iterations;
        self
    }

    pub fn with_eigenvector_tolerance(mut self, tolerance: f64) -> Self {
        self.measures.eigenvector_tolerance = tolerance;
        self
    }

    pub fn with_current_flow_epsilon(mut self, epsilon: f64) -> Self {
        self.measures.current_flow_epsilon = epsilon;
        self
    }

    pub fn with_current_flow_kmax(mut self, kmax: usize) -> Self {
        self.measures.current_flow_kmax = kmax;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.measures.seed = Some(seed);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.batch.failure_policy = policy;
        self
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.batch.preview_rows = rows;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.batch.progress = progress;
        self
    }

    pub fn build(self) -> AppConfig {
        AppConfig {
            logging: self.logging,
            loader: self.loader,
            measures: self.measures,
            batch: self.batch,
        }
    }
}

// Order of precedence of config loading: config path >> app config >> config default.
// Command line flags are applied on top of the result by the caller.
pub fn load_config(
    app_config: Option<AppConfig>,
    config_path: Option<PathBuf>,
) -> Result<AppConfig, ConfigError> {
    let app_config = app_config.unwrap_or_default();
    let json =
        serde_json::to_string(&app_config).map_err(|err| ConfigError::Foreign(Box::new(err)))?;
    let mut builder = Config::builder().add_source(File::from_str(&json, FileFormat::Json));
    if let Some(config_path) = config_path {
        builder = builder.add_source(File::from(config_path));
    }
    builder.build()?.try_deserialize::<AppConfig>()
}
