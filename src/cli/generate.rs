// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generation options.
//!
//! Accepted with or without a command, so `env-checker --ts` and
//! `env-checker generate --ts` are the same run.

use clap::Args;
use std::path::PathBuf;

use crate::config::types::ModuleStyle;

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Declaration file, relative to the root (default: .env).
    #[arg(long, value_name = "FILE", global = true)]
    pub input: Option<PathBuf>,

    /// Generated module path (default: env_checker.js, or env_checker.ts with --ts).
    #[arg(long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Generates TypeScript.
    #[arg(long, global = true)]
    pub ts: bool,

    /// Comma-separated variable names to leave out.
    #[arg(long, value_name = "NAMES", global = true)]
    pub skip: Option<String>,

    /// Adds (true) or removes (false) the reminder block in the declaration file.
    #[arg(long, value_name = "BOOL", global = true, action = clap::ArgAction::Set)]
    pub comment: Option<bool>,

    /// Injects the guard into an entry file: `default` uses package.json
    /// "main", anything else is a path.
    #[arg(long, value_name = "TARGET", global = true)]
    pub inject: Option<String>,

    /// Module style of the entry (script or module), overrides package.json "type".
    #[arg(long = "module-style", value_name = "STYLE", global = true)]
    pub module_style: Option<ModuleStyle>,

    /// Project root (default: current directory).
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,
}

impl GenerateArgs {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides = Vec::new();

        if let Some(ref root) = self.root {
            overrides.push(("generate.root", path_value(root)));
        }
        if let Some(ref input) = self.input {
            overrides.push(("generate.input", path_value(input)));
        }
        if let Some(ref output) = self.output {
            overrides.push(("generate.output", path_value(output)));
        }
        if self.ts {
            overrides.push(("generate.ts", true.into()));
        }
        if let Some(ref skip) = self.skip {
            overrides.push(("generate.skip", skip.clone().into()));
        }
        if let Some(comment) = self.comment {
            overrides.push(("generate.comment", comment.into()));
        }
        if let Some(ref target) = self.inject {
            overrides.push(("inject.target", target.clone().into()));
        }
        if let Some(style) = self.module_style {
            overrides.push(("inject.module_style", style.to_string().into()));
        }

        overrides
    }
}

fn path_value(path: &std::path::Path) -> config::Value {
    path.display().to_string().into()
}
