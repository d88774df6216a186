use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field} out of range: {value} (allowed {min} to {max})")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },
}

impl RegistrarError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistrarError::IoError(e) => format!("File access failed: {}", e),
            RegistrarError::SerializationError(e) => format!("Output formatting failed: {}", e),
            RegistrarError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            RegistrarError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            RegistrarError::OutOfRange {
                field,
                value,
                min,
                max,
            } => format!("{} must be between {} and {} (got {})", field, min, max, value),
            RegistrarError::InvalidDate { value, .. } => {
                format!("'{}' is not a valid date (expected YYYY-MM-DD)", value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegistrarError::IoError(_) => "Check that the file exists and is readable",
            RegistrarError::SerializationError(_) => "Re-run with --verbose for details",
            RegistrarError::ConfigValidationError { .. }
            | RegistrarError::InvalidConfigValueError { .. } => {
                "Review the campus TOML file against configs/campus-example.toml"
            }
            RegistrarError::OutOfRange { .. } => "Provide a value inside the allowed range",
            RegistrarError::InvalidDate { .. } => "Use the YYYY-MM-DD format, e.g. 1912-06-23",
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
