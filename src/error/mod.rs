//! Error handling for configuration loading and rendering
//!
//! Two layers:
//! - [`ConfigError`] is what [`crate::config::ConfigLoader::load`] returns. It
//!   names the missing environment variable or the offending field.
//! - [`AppError`] wraps it together with the file and serialization failures
//!   that only the CLI path can hit.

pub mod types;

use thiserror::Error;

/// Broad category of a [`ConfigError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    MissingEnv,
    InvalidField,
}

/// Validation failure produced while building a `SeedConfig`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing or invalid environment variable {var}: {reason}")]
    MissingEnv { var: String, reason: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}

impl ConfigError {
    pub fn missing_env(var: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingEnv {
            var: var.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            Self::MissingEnv { .. } => ConfigErrorKind::MissingEnv,
            Self::InvalidField { .. } => ConfigErrorKind::InvalidField,
        }
    }

    /// Name of the environment variable or settings field at fault
    pub fn field(&self) -> &str {
        match self {
            Self::MissingEnv { var, .. } => var,
            Self::InvalidField { field, .. } => field,
        }
    }
}

/// Application error type for the CLI path
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Template file not found: {path}")]
    TemplateNotFound { path: String },

    #[error("Template parse error: {message}")]
    TemplateParse { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("IO operation failed: {operation} - {message}")]
    Io { operation: String, message: String },
}

impl AppError {
    pub fn io(operation: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            message: err.to_string(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78,
            Self::TemplateNotFound { .. } | Self::TemplateParse { .. } => 66,
            Self::Serialization { .. } => 70,
            Self::Io { .. } => 74,
        }
    }
}

/// Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_kind_and_field() {
        let err = ConfigError::missing_env("CROSS_SEED_PORT", "not set");
        assert_eq!(err.kind(), ConfigErrorKind::MissingEnv);
        assert_eq!(err.field(), "CROSS_SEED_PORT");

        let err = ConfigError::invalid_field("port", "out of range");
        assert_eq!(err.kind(), ConfigErrorKind::InvalidField);
        assert_eq!(err.field(), "port");
        assert_eq!(err.to_string(), "Invalid value for 'port': out of range");
    }

    #[test]
    fn test_app_error_wraps_config_error_transparently() {
        let app: AppError = ConfigError::invalid_field("delay", "must be >= 0").into();
        assert_eq!(app.to_string(), "Invalid value for 'delay': must be >= 0");
        assert_eq!(app.exit_code(), 78);
    }
}
