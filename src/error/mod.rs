//! Error types and handling for fuibind
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Package manifest errors
//! - [`component`]: Component descriptor errors and warnings
//! - [`resolve`]: Cross-reference resolution errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//!
//! Some variants are never returned as `Err`: unknown kinds and dangling
//! references are recoverable and get collected as diagnostics instead, so
//! one bad descriptor never aborts the rest of the run.

pub mod component;
pub mod config;
pub mod fs;
pub mod manifest;
pub mod resolve;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fuibind operations
#[derive(Error, Diagnostic, Debug)]
pub enum FuiError {
    // Manifest errors
    #[error("Package manifest not found: {path}")]
    #[diagnostic(
        code(fuibind::manifest::missing),
        help("Every package directory needs a package.xml exported by the UI editor")
    )]
    MissingManifest { path: String },

    #[error("Failed to read package manifest {path}: {reason}")]
    #[diagnostic(code(fuibind::manifest::unreadable))]
    ManifestUnreadable { path: String, reason: String },

    #[error("Malformed package manifest {path}: {reason}")]
    #[diagnostic(
        code(fuibind::manifest::malformed),
        help("package.xml must contain a <resources> section followed by a <publish> section")
    )]
    MalformedManifest { path: String, reason: String },

    #[error("Duplicate package id '{id}' in {first} and {second}")]
    #[diagnostic(
        code(fuibind::manifest::duplicate_id),
        help("Package ids are assigned by the UI editor and must be unique across the assets directory")
    )]
    DuplicatePackageId {
        id: String,
        first: String,
        second: String,
    },

    // Component errors
    #[error("Failed to read component {path}: {reason}")]
    #[diagnostic(code(fuibind::component::unreadable))]
    ComponentUnreadable { path: String, reason: String },

    #[error("Unknown component kind '{kind}' in {component}, using Component")]
    #[diagnostic(code(fuibind::component::unknown_kind))]
    UnknownComponentKind { component: String, kind: String },

    #[error("Unknown display node '{node}' named '{name}' in {component}")]
    #[diagnostic(code(fuibind::component::unknown_node))]
    UnknownNodeKind {
        component: String,
        node: String,
        name: String,
    },

    // Resolution errors
    #[error("Dangling component reference: {component}.{variable} -> {target}")]
    #[diagnostic(
        code(fuibind::resolve::dangling_reference),
        help("The referenced component was deleted or its package is missing from the assets directory")
    )]
    DanglingComponentReference {
        component: String,
        variable: String,
        target: String,
    },

    #[error("Resolution finished with {count} unresolved component reference(s)")]
    #[diagnostic(
        code(fuibind::resolve::unresolved),
        help("Run 'fuibind resolve' to see every dangling reference")
    )]
    UnresolvedReferences { count: usize },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(fuibind::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(fuibind::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(fuibind::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Assets directory not found: {path}")]
    #[diagnostic(
        code(fuibind::fs::assets_not_found),
        help("Point --assets at the editor's assets directory (one sub-directory per package)")
    )]
    AssetsNotFound { path: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(fuibind::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fuibind::fs::io_error))]
    IoError { message: String },

    #[error("Failed to serialize resolution report: {reason}")]
    #[diagnostic(code(fuibind::report::serialize_failed))]
    ReportSerializeFailed { reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(fuibind::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl FuiError {
    /// Whether the error aborts the whole run
    ///
    /// Everything else is isolated to the package, component or variable
    /// that produced it.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FuiError::MalformedManifest { .. }
                | FuiError::DuplicatePackageId { .. }
                | FuiError::UnresolvedReferences { .. }
                | FuiError::ConfigNotFound { .. }
                | FuiError::ConfigReadFailed { .. }
                | FuiError::ConfigParseFailed { .. }
                | FuiError::AssetsNotFound { .. }
                | FuiError::FileWriteFailed { .. }
                | FuiError::IoError { .. }
                | FuiError::ReportSerializeFailed { .. }
                | FuiError::UnknownShell { .. }
        )
    }
}

impl From<std::io::Error> for FuiError {
    fn from(err: std::io::Error) -> Self {
        FuiError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FuiError {
    fn from(err: serde_yaml::Error) -> Self {
        FuiError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FuiError {
    fn from(err: serde_json::Error) -> Self {
        FuiError::ReportSerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FuiError>;
