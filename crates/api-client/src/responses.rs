use crate::error::ApiError;
use serde::Deserialize;

/// The `status` field every Codeforces response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAILED")]
    Failed,
}

/// The envelope wrapping every Codeforces API response.
///
/// Successful calls carry `result`; failed ones carry a human-readable `comment`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub comment: Option<String>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the envelope, turning a `FAILED` status or a missing result into an error.
    pub fn into_result(self, endpoint: &str) -> Result<T, ApiError> {
        match self.status {
            ResponseStatus::Failed => Err(ApiError::Remote {
                endpoint: endpoint.to_string(),
                comment: self.comment.unwrap_or_else(|| "no comment".to_string()),
            }),
            ResponseStatus::Ok => self.result.ok_or_else(|| {
                ApiError::InvalidData(format!("{} returned OK without a result", endpoint))
            }),
        }
    }
}
