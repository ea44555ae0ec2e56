use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to fetch '{handle}': {source}")]
    Api {
        handle: String,
        #[source]
        source: api_client::error::ApiError,
    },

    #[error("Failed to build the profile of '{handle}': {source}")]
    Analytics {
        handle: String,
        #[source]
        source: analytics::AnalyticsError,
    },

    #[error("Report error: {0}")]
    Analyzer(#[from] analyzer::AnalyzerError),
}

impl EngineError {
    /// The handle the error belongs to, if it is tied to one.
    pub fn handle(&self) -> Option<&str> {
        match self {
            EngineError::Api { handle, .. } | EngineError::Analytics { handle, .. } => Some(handle),
            EngineError::Analyzer(_) => None,
        }
    }
}
