use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Failed to write the report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize the report as CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("No rows to report; every handle failed")]
    NoRows,
}
