use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The `YYYY-MM-DDTHH:MM:SS` prefix is either missing or could
    /// not be interpreted as a valid UTC calendar date.
    #[error("invalid ISO-8601 datetime \"{0}\"")]
    InvalidIso8601(String),

    /// Non finite timestamps cannot be formatted.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(f64),
}
