use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiProviderError {
    ApiError { status: u16, message: String },
    RateLimited(String),
    Timeout(String),
    NetworkError(String),
    SerializationError(String),
    AuthenticationError(String),
}

impl AiProviderError {
    /// Whether repeating the same request later may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            AiProviderError::RateLimited(_)
            | AiProviderError::Timeout(_)
            | AiProviderError::NetworkError(_) => true,
            AiProviderError::ApiError { status, .. } => *status >= 500,
            AiProviderError::SerializationError(_) | AiProviderError::AuthenticationError(_) => false,
        }
    }

    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => AiProviderError::AuthenticationError(body),
            408 => AiProviderError::Timeout(body),
            429 => AiProviderError::RateLimited(body),
            _ => AiProviderError::ApiError { status, message: body },
        }
    }
}

impl From<reqwest::Error> for AiProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            AiProviderError::Timeout(error.to_string())
        } else if error.is_decode() {
            AiProviderError::SerializationError(error.to_string())
        } else {
            AiProviderError::NetworkError(error.to_string())
        }
    }
}

impl fmt::Display for AiProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AiProviderError::ApiError { status, message } => write!(f, "Gemini API Error (HTTP {}): {}", status, message),
            AiProviderError::RateLimited(msg) => write!(f, "Rate limit exceeded: {}", msg),
            AiProviderError::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            AiProviderError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AiProviderError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
            AiProviderError::AuthenticationError(msg) => write!(f, "Authentication Error: {}", msg),
        }
    }
}

impl Error for AiProviderError {}
