// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --show-logs BOOL  ← global.show_logs
//! --show-warns BOOL ← global.show_warns
//! --log-level N     ← Console verbosity (0-5), beats --show-logs
//! --log-file FILE   ← Also log to a file
//!
//! Precedence: CLI flags > ENV_CHECKER_* > --config > env-checker.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(long = "config", value_name = "FILE", global = true, action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Shows informational messages on the console.
    #[arg(long = "show-logs", value_name = "BOOL", global = true, action = clap::ArgAction::Set)]
    pub show_logs: Option<bool>,

    /// Shows warnings on the console.
    #[arg(long = "show-warns", value_name = "BOOL", global = true, action = clap::ArgAction::Set)]
    pub show_warns: Option<bool>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true, value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides = Vec::new();

        if let Some(show) = self.show_logs {
            overrides.push(("global.show_logs", show.into()));
        }

        if let Some(show) = self.show_warns {
            overrides.push(("global.show_warns", show.into()));
        }

        if let Some(level) = self.log_level {
            overrides.push(("global.log_level", i64::from(level).into()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file", path.display().to_string().into()));
        }

        overrides
    }
}
