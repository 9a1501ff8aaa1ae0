//! Error types for lsp-fixture-core.
//!
//! [`ValidationError`] is the only failure the [`User`](crate::User)
//! constructor can produce. [`Error`] is the canonical error for everything
//! else in the library.

use std::path::PathBuf;

/// A constructor input violated one of the `User` preconditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The name was the empty string.
    #[error("name cannot be empty")]
    EmptyName,

    /// The age was below zero.
    #[error("age cannot be negative")]
    NegativeAge {
        /// The rejected value.
        age: i64,
    },
}

/// The main error type for lsp-fixture-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The primary user of the entry sequence failed validation.
    #[error("Error creating user")]
    CreateUser(#[source] ValidationError),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML rendering error.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// A specialized Result type for lsp-fixture-core operations.
pub type Result<T> = std::result::Result<T, Error>;
