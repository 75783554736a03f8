//! Command implementations for the fuibind CLI

pub mod completions;
pub mod helpers;
pub mod list;
pub mod panels;
pub mod resolve;
pub mod version;
