//! Configuration file handling for fuibind
//!
//! This module contains data structures for:
//! - `fuibind.yaml` - Code generation configuration

pub mod codegen;

// Re-export commonly used types
pub use codegen::CodegenConfig;
