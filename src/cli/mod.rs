// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for env-checker using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! env-checker [options] [command]
//! generate   (default)
//! check
//! options
//! version
//! ```

pub mod generate;
pub mod global;


use crate::cli::generate::GenerateArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Generates a fail-fast environment guard module from a .env file.
#[derive(Debug, Parser)]
#[command(
    name = "env-checker",
    author,
    version,
    about = "Generates a fail-fast environment guard module from a .env file",
    long_about = "env-checker-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads the variable names declared in .env and writes\n\
                  env_checker.js (or .ts with --ts), exporting ENV_LIST, ENVS and\n\
                  checkEnvAndThrowError(). Run it again whenever variables are\n\
                  added or removed.",
    after_help = "CONFIG FILES:\n\n\
                  env-checker reads `env-checker.toml` from the project root if it\n\
                  exists, then every file given with --config, then ENV_CHECKER_*\n\
                  environment variables (ENV_CHECKER_GENERATE__TS=true). Command\n\
                  line flags override all of them."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Generation options
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Command to execute (default: generate)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// All configuration overrides given on the command line.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides = self.global.to_config_overrides();
        overrides.extend(self.generate.to_config_overrides());
        overrides
    }
}

/// Available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their resolved values.
    Options,

    /// Generates the guard module (default).
    Generate,

    /// Checks the current environment against the declaration file.
    Check,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
