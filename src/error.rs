//! Error types for toolpath
//!
//! Domain-specific error types using thiserror.
//!
//! Resolution outcomes (package absent, layout exhausted) are NOT errors -
//! they are [`crate::core::resolver::Resolution`] variants, because the
//! resolver degrades to a warning and never aborts the enclosing build.
//! The types here cover the failures that happen before resolution starts:
//! loading and validating the toolchain registry.

use std::path::PathBuf;
use thiserror::Error;

/// Toolchain registry configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read config file
    #[error("Failed to read config '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Toolchain entry with no candidate layouts
    #[error("Toolchain '{package}' declares no candidate layouts")]
    EmptyCandidates { package: String },

    /// Candidate layouts must be relative to the package root
    #[error("Toolchain '{package}' declares absolute candidate '{candidate}' (candidates are relative to the package root)")]
    AbsoluteCandidate { package: String, candidate: String },

    /// Same package declared twice
    #[error("Toolchain '{package}' is declared more than once")]
    DuplicatePackage { package: String },

    /// Requested package has no registry entry
    #[error("Toolchain package '{package}' is not configured. Run 'toolpath list' to see known packages.")]
    UnknownPackage { package: String },
}

/// Top-level toolpath error type
#[derive(Error, Debug)]
pub enum ToolpathError {
    /// Config error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Search path could not be rendered back to an environment value
    #[error("Cannot render search path: {source}")]
    JoinPaths { source: std::env::JoinPathsError },
}
