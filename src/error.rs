use thiserror::Error;

/// Errors that can occur while searching for recipes and saving the report
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request could not be sent or the API answered with a non-success status
    #[error("Recipe search request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected JSON document
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint is not a valid URL
    #[error("Invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Reading a prompt answer or writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
