use clap::{Parser, Subcommand};
use netchar::{
    batch::{compute_network_measures, FailurePolicy},
    config::app_config::{load_config, AppConfig, AppConfigBuilder},
    errors::GraphError,
    graph_loader::source::edge_list_loader::EdgeListFormat,
    graphgen::preferential_attachment::ba_edge_list_directory,
};
use netchar_api::core::utils::logging::init_global_logger;
use std::path::PathBuf;
use tracing::{info, warn};

pub const DEFAULT_DIRECTORY: &str = "barabasi_linear";

#[derive(Parser)]
#[command(about = "Compute structural statistics for every edge list in a directory")]
struct Args {
    /// Directory holding one edge-list file per network
    #[arg(env = "NETCHAR_DIRECTORY", default_value = DEFAULT_DIRECTORY)]
    directory: PathBuf,

    /// TOML file with configuration overrides
    #[arg(long, env = "NETCHAR_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "NETCHAR_LOG_LEVEL")]
    log_level: Option<String>,

    /// How node tokens are read: indexed or labelled
    #[arg(long, env = "NETCHAR_FORMAT")]
    format: Option<EdgeListFormat>,

    /// What to do with a network that fails: abort or skip
    #[arg(long, env = "NETCHAR_ON_ERROR")]
    on_error: Option<FailurePolicy>,

    /// Seed for the sampled current-flow pairs
    #[arg(long, env = "NETCHAR_SEED")]
    seed: Option<u64>,

    #[arg(long, env = "NETCHAR_PREVIEW_ROWS")]
    preview_rows: Option<usize>,

    /// Also write the full table to this CSV file
    #[arg(long, env = "NETCHAR_OUTPUT")]
    output: Option<PathBuf>,

    #[arg(long, env = "NETCHAR_NO_PROGRESS")]
    no_progress: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Write a directory of Barabási-Albert edge lists")]
    Generate {
        #[arg(long, default_value_t = 10)]
        count: usize,

        #[arg(long, default_value_t = 1000)]
        nodes: usize,

        #[arg(long, default_value_t = 1)]
        edges_per_step: usize,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(default_value = DEFAULT_DIRECTORY)]
        directory: PathBuf,
    },
}

impl Args {
    /// Defaults, then the config file, then whatever was set on the command line.
    fn app_config(&self) -> Result<AppConfig, GraphError> {
        let mut builder: AppConfigBuilder = load_config(None, self.config.clone())?.into();
        if let Some(log_level) = &self.log_level {
            builder = builder.with_log_level(log_level.clone());
        }
        if let Some(format) = self.format {
            builder = builder.with_format(format);
        }
        if let Some(policy) = self.on_error {
            builder = builder.with_failure_policy(policy);
        }
        if let Some(seed) = self.seed {
            builder = builder.with_seed(seed);
        }
        if let Some(rows) = self.preview_rows {
            builder = builder.with_preview_rows(rows);
        }
        if self.no_progress {
            builder = builder.with_progress(false);
        }
        Ok(builder.build())
    }
}

pub(crate) fn cli() -> Result<(), GraphError> {
    let args = Args::parse();
    let config = args.app_config()?;
    init_global_logger(config.logging.log_level.clone());

    if let Some(Commands::Generate {
        count,
        nodes,
        edges_per_step,
        seed,
        directory,
    }) = &args.command
    {
        let paths = ba_edge_list_directory(directory, *count, *nodes, *edges_per_step, *seed)?;
        info!(
            directory = %directory.display(),
            files = paths.len(),
            "generated networks"
        );
        return Ok(());
    }

    let report = compute_network_measures(&args.directory, &config)?;
    println!("{}", report.table.head(config.batch.preview_rows));
    for failure in &report.failures {
        warn!(file = %failure.file, error = %failure.error, "network was skipped");
    }
    if let Some(output) = &args.output {
        report.table.save_csv(output)?;
        info!(path = %output.display(), rows = report.table.len(), "wrote result table");
    }
    Ok(())
}
