// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for env-checker.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. env-checker.toml (project root, optional)
//! 3. --config FILE (repeatable, required)
//! 4. ENV_CHECKER_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENV_CHECKER_GENERATE__TS=true          → generate.ts = true
//! ENV_CHECKER_GENERATE__SKIP=A,B         → generate.skip = "A,B"
//! ENV_CHECKER_INJECT__MODULE_STYLE=esm   → inject.module_style = "esm"
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use loader::ConfigLoader;
use types::{GenerateConfig, GlobalConfig, InjectConfig};

/// Name of the optional project-level configuration file.
pub const CONFIG_FILE_NAME: &str = "env-checker.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ENV_CHECKER";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Console output options.
    pub global: GlobalConfig,
    /// Generation options.
    pub generate: GenerateConfig,
    /// Entry injection options.
    pub inject: InjectConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use env_checker_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("env-checker.toml")
    ///     .with_env_prefix("ENV_CHECKER")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display, one `key = value` per line.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_generate_options(&mut options);
        self.format_inject_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.show_logs".into(), self.global.show_logs.to_string());
        options.insert("global.show_warns".into(), self.global.show_warns.to_string());
        options.insert(
            "global.log_level".into(),
            self.global.console_level().as_u8().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_ref()));
    }

    fn format_generate_options(&self, options: &mut BTreeMap<String, String>) {
        let generate = &self.generate;
        options.insert("generate.root".into(), generate.root.display().to_string());
        options.insert("generate.input".into(), generate.input.display().to_string());
        options.insert(
            "generate.output".into(),
            generate.output.as_ref().map_or_else(
                || generate.dialect().default_file_name().to_string(),
                |p| p.display().to_string(),
            ),
        );
        options.insert("generate.ts".into(), generate.ts.to_string());
        options.insert("generate.dialect".into(), generate.dialect().to_string());
        options.insert("generate.skip".into(), generate.skip.to_string());
        options.insert(
            "generate.comment".into(),
            generate
                .comment
                .map_or_else(|| "unchanged".to_string(), |c| c.to_string()),
        );
    }

    fn format_inject_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "inject.target".into(),
            self.inject
                .target
                .as_ref()
                .map_or_else(String::new, ToString::to_string),
        );
        options.insert(
            "inject.module_style".into(),
            self.inject
                .module_style
                .map_or_else(|| "from manifest".to_string(), |s| s.to_string()),
        );
        options.insert(
            "inject.manifest".into(),
            self.inject.manifest.display().to_string(),
        );
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
