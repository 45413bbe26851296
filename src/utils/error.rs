use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError(_) => ErrorCategory::Io,
            ConvertError::SerializationError(_) => ErrorCategory::Serialization,
            ConvertError::ConfigError { .. }
            | ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for the CLI: 1 for bad configuration, 3 for I/O or output failures.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", e),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", e),
                _ => format!("File operation failed: {}", e),
            },
            ConvertError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            ConvertError::ConfigError { message } => format!("Configuration problem: {}", message),
            ConvertError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is not valid: {}", field, message)
            }
            ConvertError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has an invalid value '{}': {}", field, value, reason)
            }
            ConvertError::MissingConfigError { field } => {
                format!("Setting '{}' is required but was not provided", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check that the input score exists and the output directory is present"
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check read permission on the input and write permission on the output location"
                }
                _ => "Retry the conversion once the file system issue is resolved",
            },
            ConvertError::SerializationError(_) => "Report this score file as a bug",
            ConvertError::ConfigError { .. } | ConvertError::ConfigValidationError { .. } => {
                "Check the TOML job file for syntax errors and missing sections"
            }
            ConvertError::InvalidConfigValueError { .. } => {
                "Correct the value shown and run the conversion again"
            }
            ConvertError::MissingConfigError { .. } => {
                "Pass both INPUT and OUTPUT paths, or use --config with a job file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
