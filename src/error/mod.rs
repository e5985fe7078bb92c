// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                EnvCheckerError
//!                      |
//!   +--------+---------+--------+--------+---------+--------+--------+
//!   |        |         |        |        |         |        |        |
//!   v        v         v        v        v         v        v        v
//! Missing  Missing   Write    Read   Undecod-  Manifest Missing  Config
//!  File     Entry    (io)     (io)    able     (json)  Variable   Box
//!
//! Every variant is fatal for the current invocation; nothing is retried.
//! Malformed declaration lines are not errors and never reach this type.
//! ```

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvCheckerError`].
pub type EnvCheckerResult<T> = std::result::Result<T, EnvCheckerError>;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum EnvCheckerError {
    /// Declaration file or explicit injection target does not exist.
    #[error("file not found: {path}")]
    MissingFile { path: String },

    /// The project manifest has no usable entry reference.
    #[error("no usable entry point: {reason}")]
    MissingEntry { reason: String },

    /// Destination could not be written.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File exists but could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File must be rewritten but its bytes are not valid in its encoding.
    #[error("refusing to rewrite '{path}': content is not valid {encoding}")]
    Undecodable { path: String, encoding: &'static str },

    /// Project manifest exists but could not be parsed.
    #[error("invalid manifest '{path}': {message}")]
    Manifest { path: String, message: String },

    /// A declared variable is absent from the environment snapshot.
    #[error(
        "[ENV ERROR] Missing required environment variable: {name}\n\
         Make sure '{name}' is defined in your {declaration_file} file."
    )]
    MissingVariable {
        name: String,
        declaration_file: String,
    },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

impl EnvCheckerError {
    /// Creates a [`EnvCheckerError::MissingFile`] for `path`.
    pub fn missing_file(path: &Path) -> Self {
        Self::MissingFile {
            path: path.display().to_string(),
        }
    }

    /// Creates a [`EnvCheckerError::MissingEntry`] with the given reason.
    pub fn missing_entry(reason: impl Into<String>) -> Self {
        Self::MissingEntry {
            reason: reason.into(),
        }
    }

    /// Creates a [`EnvCheckerError::Write`] for `path`.
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }

    /// Creates a [`EnvCheckerError::Undecodable`] for `path`.
    pub fn undecodable(path: &Path, encoding: &'static str) -> Self {
        Self::Undecodable {
            path: path.display().to_string(),
            encoding,
        }
    }

    /// Creates a [`EnvCheckerError::Read`] for `path`.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }
}

impl From<ConfigError> for EnvCheckerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration sources could not be loaded or merged.
    #[error("failed to load configuration: {0}")]
    Load(String),
}
