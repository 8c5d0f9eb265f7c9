use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::HttpClientError(_) => "Could not set up the fun fact HTTP client".to_string(),
            AppError::IoError(e) => format!("File or network operation failed: {}", e),
            AppError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            AppError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for '{}'", value, field)
            }
            AppError::ServerError { message } => format!("The server stopped: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::HttpClientError(_) => "Check the TLS setup and the fun fact timeout setting",
            AppError::IoError(_) => "Check that the file exists and the address is not already in use",
            AppError::ConfigValidationError { .. } => {
                "Review the configuration file and command line flags"
            }
            AppError::InvalidConfigValueError { .. } => {
                "Use an http(s) URL for the fact endpoint and a timeout of at least one second"
            }
            AppError::ServerError { .. } => "Check the listen address and restart the service",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
