use crate::error::ApiError;
use async_trait::async_trait;
use configuration::ApiConfig;
use core_types::{RatingChange, Submission, UserInfo};
use serde::de::{DeserializeOwned, IgnoredAny};

pub mod error;
pub mod responses;

// --- Public API ---
pub use responses::{ApiResponse, ResponseStatus};

pub const USER_INFO: &str = "user.info";
pub const USER_STATUS: &str = "user.status";
pub const USER_RATING: &str = "user.rating";

/// The abstract interface for the profile data source.
/// The profile builder only talks to this trait, allowing the underlying
/// implementation (live or fixture) to be swapped out.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetches the public profile of a single handle (`user.info`).
    async fn fetch_user_info(&self, handle: &str) -> Result<UserInfo, ApiError>;

    /// Fetches every submission the handle has made (`user.status`).
    async fn fetch_submissions(&self, handle: &str) -> Result<Vec<Submission>, ApiError>;

    /// Fetches the handle's rated contest history (`user.rating`).
    async fn fetch_rating_history(&self, handle: &str) -> Result<Vec<RatingChange>, ApiError>;
}

/// A concrete implementation of the `ApiClient` for the public Codeforces API.
#[derive(Clone)]
pub struct CodeforcesClient {
    client: reqwest::Client,
    base_url: String,
}

impl CodeforcesClient {
    pub fn new(api_config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("leaderboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: api_config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET against `{base_url}/{method}` and unwraps the response envelope.
    async fn _get<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, method);
        tracing::debug!(%url, ?params, "Requesting Codeforces API.");

        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Codeforces explains most failures in the envelope's `comment`; fall back to the raw body.
            let comment = serde_json::from_str::<ApiResponse<IgnoredAny>>(&text)
                .ok()
                .and_then(|envelope| envelope.comment)
                .unwrap_or(text);
            return Err(ApiError::Status {
                endpoint: method.to_string(),
                status: status.as_u16(),
                comment,
            });
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&text)
            .map_err(|e| ApiError::Deserialization(format!("{}: {}", method, e)))?;
        envelope.into_result(method)
    }
}

#[async_trait]
impl ApiClient for CodeforcesClient {
    async fn fetch_user_info(&self, handle: &str) -> Result<UserInfo, ApiError> {
        let users: Vec<UserInfo> = self._get(USER_INFO, &[("handles", handle)]).await?;
        users.into_iter().next().ok_or_else(|| {
            ApiError::InvalidData(format!("{} returned no user for handle '{}'", USER_INFO, handle))
        })
    }

    async fn fetch_submissions(&self, handle: &str) -> Result<Vec<Submission>, ApiError> {
        self._get(USER_STATUS, &[("handle", handle)]).await
    }

    async fn fetch_rating_history(&self, handle: &str) -> Result<Vec<RatingChange>, ApiError> {
        self._get(USER_RATING, &[("handle", handle)]).await
    }
}
