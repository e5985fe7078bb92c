// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Presence check of declared variables against a process environment.
//!
//! Mirrors `checkEnvAndThrowError` from the generated module: names are
//! checked in declaration order, an empty value counts as missing, and the
//! first missing name is the error.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use tracing::{debug, error};

use crate::error::{EnvCheckerError, EnvCheckerResult};

/// Immutable copy of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Captures the current process environment.
    ///
    /// Names or values that are not valid Unicode are converted lossily.
    #[must_use]
    pub fn capture() -> Self {
        let vars: HashMap<_, _> = std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect();
        debug!(count = vars.len(), "captured process environment");
        Self { vars }
    }

    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Whether `name` is present with a non-empty value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Fails on the first name in `names` not set in `snapshot`.
///
/// `declaration_file` is the file name shown in the error message.
///
/// # Errors
///
/// Returns [`EnvCheckerError::MissingVariable`] naming the first missing
/// variable. Names after it are not examined.
pub fn check_env<'a, I>(names: I, snapshot: &EnvSnapshot, declaration_file: &str) -> EnvCheckerResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for name in names {
        if !snapshot.is_set(name) {
            error!(variable = name, declaration_file, "missing required environment variable");
            return Err(EnvCheckerError::MissingVariable {
                name: name.to_string(),
                declaration_file: declaration_file.to_string(),
            });
        }
    }
    Ok(())
}

/// Every name in `names` not set in `snapshot`, in order.
#[must_use]
pub fn missing<'a, I>(names: I, snapshot: &EnvSnapshot) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| !snapshot.is_set(name))
        .collect()
}
