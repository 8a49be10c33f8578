use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("No cache available: {0}")]
    NoCacheAvailable(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Invalid session precondition: {0}")]
    InvalidSessionPrecondition(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::NoCacheAvailable(_) => "NO_CACHE_AVAILABLE",
            AppError::Cache(_) => "CACHE_ERROR",
            AppError::InvalidSessionPrecondition(_) => "INVALID_SESSION_PRECONDITION",
            AppError::InvalidTransition(_) => "INVALID_TRANSITION",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Decode(err.to_string())
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Cache(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
