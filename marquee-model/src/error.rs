use thiserror::Error;

/// Errors produced when shaping wire records for display.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The wire release date did not parse as `YYYY-MM-DD`. Mapping fails
    /// loudly rather than defaulting the record.
    #[error("invalid release date {value:?}: {source}")]
    InvalidReleaseDate {
        /// The offending wire value.
        value: String,
        /// The underlying parse failure.
        source: chrono::ParseError,
    },
}

/// Convenience alias for model results.
pub type Result<T> = std::result::Result<T, ModelError>;
