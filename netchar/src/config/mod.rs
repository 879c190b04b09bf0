//! Layered run configuration: built-in defaults, then an optional TOML file, then whatever the
//! caller sets through [AppConfigBuilder](app_config::AppConfigBuilder).

pub mod app_config;
pub mod batch_config;
pub mod loader_config;
pub mod log_config;
pub mod measure_config;
