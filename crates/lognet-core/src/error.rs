use thiserror::Error;

/// Top-level error type for the shared lognet types.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid color: {0} (expected one of blue, red, green, orange, yellow, purple, gray, white)")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
