use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::HashSet;

pub const DEFAULT_BASE_URL: &str = "https://codeforces.com/api";
pub const DEFAULT_OUTPUT_FILE: &str = "leaderboard.csv";
pub const HANDLES_KEY: &str = "cf_handles";

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// The handles to rank. The loader folds the original `CF_HANDLES` key into this one.
    #[serde(rename = "cf_handles", default)]
    pub handles: HandleList,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Handles may be given as one whitespace-separated string or as a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HandleList {
    Joined(String),
    List(Vec<String>),
}

impl Default for HandleList {
    fn default() -> Self {
        HandleList::Joined(String::new())
    }
}

impl HandleList {
    /// Trimmed, non-empty handles in input order. Repeated handles keep their first position.
    pub fn resolve(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            HandleList::Joined(joined) => joined.split_whitespace().collect(),
            HandleList::List(list) => list.iter().map(|h| h.trim()).collect(),
        };

        let mut seen = HashSet::new();
        let mut handles = Vec::with_capacity(raw.len());
        for handle in raw.into_iter().filter(|h| !h.is_empty()) {
            if seen.insert(handle) {
                handles.push(handle.to_string());
            } else {
                tracing::warn!(handle, "Duplicate handle ignored.");
            }
        }
        handles
    }
}

/// Where the remote API lives.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Controls how the final table is ordered and where it is written.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default)]
    pub sort_by: SortKey,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            sort_by: SortKey::default(),
        }
    }
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

/// The column the leaderboard is ranked by, always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    ProblemsSolved,
    Rating,
    ContestsJoined,
}

/// Execution parameters for a single leaderboard run.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// How many handles are fetched at once. Results keep input order regardless.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

fn default_max_concurrency() -> usize {
    1
}

/// What happens when fetching one handle fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the whole run; no report is written.
    #[default]
    FailFast,
    /// Skip the failed handle, report it, and rank the rest.
    Isolate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    #[serde(default)]
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Settings {
    /// Builds settings for the given handles with every other section defaulted.
    pub fn with_handles<I, S>(handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            handles: HandleList::List(handles.into_iter().map(Into::into).collect()),
            api: ApiConfig::default(),
            report: ReportConfig::default(),
            run: RunConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn handles(&self) -> Vec<String> {
        self.handles.resolve()
    }

    /// Rejects settings that cannot produce a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.handles().is_empty() {
            return Err(ConfigError::ValidationError(
                "CF_HANDLES variable is missing".to_string(),
            ));
        }
        if self.run.max_concurrency == 0 {
            return Err(ConfigError::ValidationError(
                "run.max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.report.output_file.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "report.output_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
