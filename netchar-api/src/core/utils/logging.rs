use tracing_subscriber::{
    fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Build the filter for the given level. `RUST_LOG` wins when it is set.
pub fn get_log_env(log_level: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    })
}

/// Install the global subscriber. Later calls are no-ops, so tests can call this freely.
pub fn init_global_logger(log_level: String) {
    let filter = get_log_env(log_level);
    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::NONE),
        )
        .try_init()
        .ok();
}

pub fn global_info_logger() {
    init_global_logger("INFO".to_string())
}
