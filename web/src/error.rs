use thiserror::Error;

/// Main error type for the Tavola client
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Backend returned HTTP status {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => AppError::Status(status.as_u16()),
            None => AppError::Request(error.to_string()),
        }
    }
}

/// Result type alias for Tavola operations
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with a custom message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(_) => {
                "Unable to reach the backend. Please check your connection.".to_string()
            }
            Self::Status(status) => format!("The backend rejected the request (HTTP {}).", status),
            Self::Decode(_) => "The backend sent an unexpected response.".to_string(),
            Self::Validation(msg) => msg.clone(),
        }
    }
}
