use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Decoding error: {0}")]
    DecodingError(#[from] std::string::FromUtf8Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Decoding,
    Configuration,
    Processing,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FilterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FilterError::IoError(_) => ErrorCategory::Io,
            FilterError::DecodingError(_) => ErrorCategory::Decoding,
            FilterError::SerializationError(_) => ErrorCategory::Serialization,
            FilterError::ConfigValidationError { .. }
            | FilterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FilterError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Decoding | ErrorCategory::Processing => {
                ErrorSeverity::High
            }
            ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FilterError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check that the word list path exists".to_string()
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check read and write permissions on the word list".to_string()
                }
                _ => "Check the file system (free space, mounts) and retry".to_string(),
            },
            FilterError::DecodingError(_) => {
                "Convert the word list to UTF-8 before filtering".to_string()
            }
            FilterError::SerializationError(_) => {
                "Run again without --json to skip the report".to_string()
            }
            FilterError::ConfigValidationError { field, .. }
            | FilterError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the command line or config file", field)
            }
            FilterError::ProcessingError { .. } => {
                "Inspect the word list contents and retry".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FilterError::IoError(e) => format!("Could not access the word list: {}", e),
            FilterError::DecodingError(e) => {
                format!("The word list is not valid UTF-8 text: {}", e)
            }
            FilterError::SerializationError(e) => format!("Could not build the run report: {}", e),
            FilterError::ConfigValidationError { field, message } => {
                format!("Invalid configuration for '{}': {}", field, message)
            }
            FilterError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' = '{}' is not allowed: {}", field, value, reason),
            FilterError::ProcessingError { message } => format!("Filtering failed: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
