use std::fmt;
use std::error::Error as StdError;
use crate::enums::validation_error::ValidationError;
use crate::structs::analysis_failure::AnalysisFailure;

#[derive(Debug, Clone)]
pub enum ExplainerError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Input errors, caught before any remote call
    Validation(ValidationError),

    MissingCredential {
        env_var: String,
    },

    // Remote analysis errors
    Analysis(AnalysisFailure),

    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    SystemError {
        operation: String,
        reason: String,
    },

    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },
}

impl ExplainerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn missing_credential(env_var: &str) -> Self {
        Self::MissingCredential {
            env_var: env_var.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Analysis(failure) => failure.is_transient(),
            Self::NetworkError { .. } => true,
            Self::UserInputError { .. } => true,
            Self::Validation(_) => true,
            Self::ConfigurationError { .. } => true,
            Self::MissingCredential { .. } => false,
            Self::SystemError { .. } => false,
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::MissingCredential { .. } => ErrorSeverity::High,
            Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::Analysis(_) => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::Validation(_) => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::UserInputError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::Validation(error) => error.to_string(),
            Self::MissingCredential { env_var } => {
                format!("🔑 Google API Key is required. Set {} or pass --api-key.\n💡 Get a free key from https://aistudio.google.com/", env_var)
            }
            Self::Analysis(failure) => failure.user_message(),
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
                msg
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, file_path, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
            Self::UserInputError { input, expected, suggestion } => {
                format!("Invalid input '{}': expected {}\n💡 {}", input, expected, suggestion)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for ExplainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ExplainerError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

pub type ExplainerResult<T> = Result<T, ExplainerError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &ExplainerError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<ValidationError> for ExplainerError {
    fn from(error: ValidationError) -> Self {
        ExplainerError::Validation(error)
    }
}

impl From<AnalysisFailure> for ExplainerError {
    fn from(failure: AnalysisFailure) -> Self {
        ExplainerError::Analysis(failure)
    }
}

impl From<std::io::Error> for ExplainerError {
    fn from(error: std::io::Error) -> Self {
        ExplainerError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for ExplainerError {
    fn from(error: reqwest::Error) -> Self {
        ExplainerError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
