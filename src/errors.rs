use store_config::ConfigError;
use thiserror::Error;

/// Fallback message when a failed response carries no `error` field.
pub const GENERIC_API_ERROR: &str = "API request failed";

/// Failures of a single request/response round trip.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error type shared by the auth controller, managers, and reports.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Not logged in. Use `login` first.")]
    NotAuthenticated,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Session storage error: {0}")]
    Session(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl From<ConfigError> for StoreError {
    fn from(err: ConfigError) -> Self {
        StoreError::Config(err.to_string())
    }
}
