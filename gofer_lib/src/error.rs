use thiserror::Error as ThisError;

/// Library errors.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Model API call error.
    #[error("Failed to call model API: {0}")]
    ApiCallError(#[from] reqwest::Error),

    /// JSON handling error.
    #[error("Failed to process model API call: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Response parsing error.
    #[error("Failed to parse model response: {0}")]
    ResponseError(&'static str),

    /// Error message returned by the provider.
    #[error("Model API responded with error: {0}")]
    ModelErrorMessage(String),

    /// General error.
    #[error("{0}")]
    Error(String),
}
