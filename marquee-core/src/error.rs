use marquee_model::ModelError;
use thiserror::Error;

/// Errors surfaced by movie providers and the screen state.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API answered with an unexpected status or payload.
    #[error("API error: {0}")]
    Api(String),

    /// The requested resource does not exist.
    #[error("Not found")]
    NotFound,

    /// The API throttled the request.
    #[error("Rate limited")]
    RateLimited,

    /// The configured API key was rejected.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not a valid list payload.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A wire record could not be shaped for display.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Convenience alias for provider results.
pub type Result<T> = std::result::Result<T, ProviderError>;
