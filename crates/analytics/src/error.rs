use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Registration timestamp {0} is outside the representable date range")]
    InvalidTimestamp(i64),
}
