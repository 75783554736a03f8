//! Configuration errors

use super::FuiError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> FuiError {
    FuiError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> FuiError {
    FuiError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> FuiError {
    FuiError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
