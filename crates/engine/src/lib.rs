use crate::error::EngineError;
use analytics::AnalyticsEngine;
use analyzer::{Analyzer, RankedRow, write_csv};
use api_client::ApiClient;
use configuration::{FailurePolicy, Settings};
use core_types::LeaderboardRow;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::sync::Arc;

pub mod error;
pub mod fetcher;

pub use fetcher::{build_profile, fetch_profile};

/// A handle that could not be processed, kept when failures are isolated.
#[derive(Debug)]
pub struct HandleFailure {
    pub handle: String,
    pub error: EngineError,
}

/// What a run produced: rows in input order plus any isolated failures.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub rows: Vec<LeaderboardRow>,
    pub failures: Vec<HandleFailure>,
}

/// The result of a full leaderboard generation.
#[derive(Debug)]
pub struct LeaderboardSummary {
    pub output_path: PathBuf,
    pub ranked: Vec<RankedRow>,
    pub failures: Vec<HandleFailure>,
}

/// The orchestrator that turns a list of handles into leaderboard rows.
pub struct LeaderboardEngine {
    api_client: Arc<dyn ApiClient>,
    analytics: AnalyticsEngine,
    max_concurrency: usize,
    failure_policy: FailurePolicy,
    progress: ProgressBar,
}

impl LeaderboardEngine {
    /// Creates an engine that fetches one handle at a time and stops at the first failure.
    pub fn new(api_client: Arc<dyn ApiClient>) -> Self {
        Self {
            api_client,
            analytics: AnalyticsEngine::new(),
            max_concurrency: 1,
            failure_policy: FailurePolicy::FailFast,
            progress: ProgressBar::hidden(),
        }
    }

    /// Creates an engine with the run parameters from `settings`.
    pub fn from_settings(api_client: Arc<dyn ApiClient>, settings: &Settings) -> Self {
        Self::new(api_client)
            .with_max_concurrency(settings.run.max_concurrency)
            .with_failure_policy(settings.run.failure_policy)
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Pins "Member Since" to a fixed reference time.
    pub fn with_analytics(mut self, analytics: AnalyticsEngine) -> Self {
        self.analytics = analytics;
        self
    }

    /// Reports progress on the given bar; its length is set by `run`.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Fetches every handle and returns the rows in input order.
    ///
    /// Under `FailFast` the first error is returned and any in-flight fetches are dropped.
    /// Under `Isolate` failed handles are collected and the rest carry on.
    pub async fn run(&self, handles: &[String]) -> Result<RunOutcome, EngineError> {
        tracing::info!(
            handles = handles.len(),
            max_concurrency = self.max_concurrency,
            policy = ?self.failure_policy,
            "Starting leaderboard run."
        );
        self.progress.set_length(handles.len() as u64);

        // `buffered` yields in input order no matter which fetch completes first.
        let results = stream::iter(handles)
            .map(|handle| async move {
                self.progress.set_message(handle.clone());
                let result = build_profile(self.api_client.as_ref(), &self.analytics, handle).await;
                self.progress.inc(1);
                (handle, result)
            })
            .buffered(self.max_concurrency);
        let mut results = std::pin::pin!(results);

        let mut outcome = RunOutcome::default();
        while let Some((handle, result)) = results.next().await {
            match result {
                Ok(row) => outcome.rows.push(row),
                Err(error) => match self.failure_policy {
                    FailurePolicy::FailFast => {
                        self.progress.abandon_with_message(format!("Failed on {}", handle));
                        tracing::error!(handle = %handle, error = %error, "Aborting run.");
                        return Err(error);
                    }
                    FailurePolicy::Isolate => {
                        tracing::warn!(handle = %handle, error = %error, "Skipping handle.");
                        outcome.failures.push(HandleFailure {
                            handle: handle.clone(),
                            error,
                        });
                    }
                },
            }
        }

        self.progress.finish_with_message("Profiles fetched.");
        Ok(outcome)
    }
}

/// Runs the engine over the configured handles, ranks the rows and writes the CSV.
///
/// Nothing is written unless every required fetch succeeded (or, when failures are
/// isolated, at least one handle produced a row).
pub async fn generate_leaderboard(
    engine: &LeaderboardEngine,
    settings: &Settings,
) -> Result<LeaderboardSummary, EngineError> {
    let handles = settings.handles();
    let outcome = engine.run(&handles).await?;

    let ranked = Analyzer::new(settings.report.sort_by).rank(outcome.rows);
    let output_path = write_csv(&ranked, &settings.report.output_file)?;

    Ok(LeaderboardSummary {
        output_path,
        ranked,
        failures: outcome.failures,
    })
}
