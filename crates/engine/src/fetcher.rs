use crate::error::EngineError;
use analytics::AnalyticsEngine;
use api_client::ApiClient;
use api_client::error::ApiError;
use core_types::{LeaderboardRow, ProfileRecord};

/// Fetches the three payloads of one handle, in order, and normalizes them.
///
/// Nothing is carried between calls: every invocation builds its record from scratch.
pub async fn fetch_profile(
    client: &dyn ApiClient,
    analytics: &AnalyticsEngine,
    handle: &str,
) -> Result<ProfileRecord, EngineError> {
    let api_error = |source: ApiError| EngineError::Api {
        handle: handle.to_string(),
        source,
    };

    let info = client.fetch_user_info(handle).await.map_err(api_error)?;
    let submissions = client.fetch_submissions(handle).await.map_err(api_error)?;
    let rating_history = client.fetch_rating_history(handle).await.map_err(api_error)?;

    tracing::debug!(
        handle,
        submissions = submissions.len(),
        contests = rating_history.len(),
        "Fetched profile data."
    );

    Ok(analytics.profile(info, &submissions, &rating_history))
}

/// Builds the flat leaderboard row of one handle.
pub async fn build_profile(
    client: &dyn ApiClient,
    analytics: &AnalyticsEngine,
    handle: &str,
) -> Result<LeaderboardRow, EngineError> {
    let profile = fetch_profile(client, analytics, handle).await?;
    analytics
        .leaderboard_row(&profile)
        .map_err(|source| EngineError::Analytics {
            handle: handle.to_string(),
            source,
        })
}
