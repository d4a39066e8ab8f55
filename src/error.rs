use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Word source failed: {0}")]
    WordSource(#[from] std::io::Error),

    #[error("Secret definition parse error: {0}")]
    ConfigParse(String),

    #[error("Hashing failed: {0}")]
    Hashing(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
