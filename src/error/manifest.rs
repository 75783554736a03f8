//! Package manifest errors

use super::FuiError;

/// Creates a missing manifest error
pub fn missing(path: impl Into<String>) -> FuiError {
    FuiError::MissingManifest { path: path.into() }
}

/// Creates a manifest unreadable error
pub fn unreadable(path: impl Into<String>, reason: impl Into<String>) -> FuiError {
    FuiError::ManifestUnreadable {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a malformed manifest error
pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> FuiError {
    FuiError::MalformedManifest {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a duplicate package id error
pub fn duplicate_id(
    id: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
) -> FuiError {
    FuiError::DuplicatePackageId {
        id: id.into(),
        first: first.into(),
        second: second.into(),
    }
}
