use crate::error::ConfigError;
use std::collections::HashMap;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use settings::{
    ApiConfig, FailurePolicy, HandleList, LoggingConfig, ReportConfig, RunConfig, Settings,
    SortKey,
};
pub use telemetry::init_tracing;

/// File looked up in the working directory when no path is given (`cf_handles.json`, `cf_handles.toml`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "cf_handles";

/// Prefix for environment overrides, e.g. `LEADERBOARD_CF_HANDLES` or `LEADERBOARD_RUN__MAX_CONCURRENCY`.
pub const ENV_PREFIX: &str = "LEADERBOARD";

/// Key used by the original `cf_handles.json` layout.
pub const LEGACY_HANDLES_KEY: &str = "CF_HANDLES";

/// Loads the application settings without validating them.
///
/// An explicit `path` must exist. Without one, `cf_handles.*` in the working directory is used
/// if present. Environment variables prefixed with `LEADERBOARD_` are layered on top, with `__`
/// separating nested keys. A file-level `CF_HANDLES` is read as the lowest-priority value of
/// `cf_handles`, so both a lowercase key and `LEADERBOARD_CF_HANDLES` override it.
///
/// Call [`Settings::validate`] once any command-line overrides have been applied.
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::with_name(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };
    let file_config = config::Config::builder().add_source(file).build()?;

    let mut builder = config::Config::builder();
    let file_keys = file_config
        .clone()
        .try_deserialize::<HashMap<String, config::Value>>()?;
    if let Some(legacy) = file_keys.get(LEGACY_HANDLES_KEY) {
        builder = builder.set_default(settings::HANDLES_KEY, legacy.clone())?;
    }

    let builder = builder
        .add_source(file_config)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;

    tracing::debug!(
        handles = settings.handles().len(),
        base_url = %settings.api.base_url,
        "Configuration loaded."
    );
    Ok(settings)
}
