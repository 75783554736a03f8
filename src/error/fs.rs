//! File system errors

use super::FuiError;

/// Creates an assets directory not found error
pub fn assets_not_found(path: impl Into<String>) -> FuiError {
    FuiError::AssetsNotFound { path: path.into() }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> FuiError {
    FuiError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> FuiError {
    FuiError::IoError {
        message: message.into(),
    }
}
