use thiserror::Error;

/// Failures from the recipe API client.
/// The variant decides which message the user sees, so keep the split between
/// "no response", "bad status" and "everything else" intact.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (connect failure, timeout, request not sent).
    #[error("network error: {0}")]
    Network(String),

    /// A response arrived with a non-2xx status.
    #[error("server responded with {status} {status_text}")]
    Server { status: u16, status_text: String },

    /// Anything else, e.g. a body that is not the expected JSON.
    #[error("{message}")]
    Unexpected { message: String },

    /// `random.php` answered without a meal.
    #[error("the service returned no meal")]
    EmptyResponse,
}

impl ApiError {
    /// Single human-readable line for the view's error slot.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                status,
                status_text,
            } => format!("Server error: {status} {status_text}"),
            ApiError::Network(_) => {
                "Network error: Unable to reach the server. Please check your connection."
                    .to_string()
            }
            ApiError::Unexpected { .. } | ApiError::EmptyResponse => {
                format!("Unexpected error: {self}")
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return ApiError::Server {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            };
        }
        // A request that could not be built never left the client.
        if e.is_builder() {
            return ApiError::Unexpected {
                message: e.to_string(),
            };
        }
        if e.is_connect() || e.is_timeout() || e.is_request() {
            return ApiError::Network(e.to_string());
        }
        ApiError::Unexpected {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Unexpected {
            message: e.to_string(),
        }
    }
}
