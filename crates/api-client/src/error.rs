use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Could not connect to the Codeforces API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}: {comment}")]
    Status {
        endpoint: String,
        status: u16,
        comment: String,
    },

    #[error("{endpoint} failed: {comment}")]
    Remote { endpoint: String, comment: String },

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),

    #[error("Invalid data format from API: {0}")]
    InvalidData(String),
}
