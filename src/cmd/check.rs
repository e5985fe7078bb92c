// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command: runs the guard against the current process environment.

use anyhow::Context;
use tracing::{info, warn};

use crate::config::Config;
use crate::config::paths::ProjectPaths;
use crate::declaration::load_declarations;
use crate::error::Result;
use crate::guard::{EnvSnapshot, check_env, missing};

/// Checks every declared (non-skipped) variable against `snapshot`.
///
/// # Errors
///
/// Returns an error if the declaration file cannot be loaded, or
/// [`crate::error::EnvCheckerError::MissingVariable`] for the first variable
/// that is not set.
pub fn run_check(config: &Config, snapshot: &EnvSnapshot) -> Result<()> {
    let paths = ProjectPaths::resolve(config, config.generate.dialect());
    let names = load_declarations(&paths.input)
        .with_context(|| format!("failed to load declarations from {}", paths.input.display()))?
        .without(&config.generate.skip);

    let absent = missing(names.iter(), snapshot);
    if absent.len() > 1 {
        warn!(missing = ?absent, "several required variables are not set");
    }

    check_env(names.iter(), snapshot, &paths.input_file_name())?;
    info!(variables = names.len(), "all required environment variables are set");
    Ok(())
}

/// Runs [`run_check`] against the environment of this process.
///
/// # Errors
///
/// See [`run_check`].
pub fn run_check_command(config: &Config) -> Result<()> {
    run_check(config, &EnvSnapshot::capture())
}
