// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for env-checker.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, GenerateConfig, InjectConfig
//! Dialect:      Dynamic (.js) | Typed (.ts)
//! ModuleStyle:  Script (require) | Module (import)
//! InjectTarget: Manifest ("default") | Path
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::declaration::SkipList;
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Output dialect of generated and injected source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Plain JavaScript.
    #[default]
    Dynamic,
    /// TypeScript.
    Typed,
}

impl Dialect {
    /// Infers the dialect from a file extension.
    ///
    /// `.ts`, `.mts` and `.cts` are typed; anything else is dynamic.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ts" | "mts" | "cts") => Self::Typed,
            _ => Self::Dynamic,
        }
    }

    /// Resolves the output dialect: `force_typed` wins, otherwise the
    /// output extension decides, otherwise dynamic.
    #[must_use]
    pub fn resolve(force_typed: bool, output: Option<&Path>) -> Self {
        if force_typed {
            Self::Typed
        } else {
            output.map_or(Self::Dynamic, Self::from_path)
        }
    }

    /// Default file name of the generated module.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Dynamic => "env_checker.js",
            Self::Typed => "env_checker.ts",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dynamic => write!(f, "javascript"),
            Self::Typed => write!(f, "typescript"),
        }
    }
}

/// Loading syntax of the target project.
///
/// Config files accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ModuleStyle {
    /// `require(...)`, `"type": "commonjs"` or no type at all.
    #[default]
    Script,
    /// `import ...`, `"type": "module"`.
    Module,
}

impl ModuleStyle {
    /// Maps a `package.json` `type` field to a module style.
    #[must_use]
    pub fn from_manifest_type(value: Option<&str>) -> Self {
        match value {
            Some("module") => Self::Module,
            _ => Self::Script,
        }
    }

    /// Style fixed by a file extension, regardless of the project setting.
    ///
    /// `.cjs`/`.cts` are always script and `.mjs`/`.mts` always module.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("cjs" | "cts") => Some(Self::Script),
            Some("mjs" | "mts") => Some(Self::Module),
            _ => None,
        }
    }

    /// The style a file at `path` actually uses in a `project` styled project.
    #[must_use]
    pub fn for_file(path: &Path, project: Self) -> Self {
        Self::from_path(path).unwrap_or(project)
    }
}

impl std::fmt::Display for ModuleStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Script => write!(f, "script"),
            Self::Module => write!(f, "module"),
        }
    }
}

impl std::str::FromStr for ModuleStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "script" | "commonjs" | "cjs" => Ok(Self::Script),
            "module" | "esm" => Ok(Self::Module),
            _ => Err(ConfigError::InvalidValue {
                section: "inject".to_string(),
                key: "module_style".to_string(),
                message: format!("expected 'script' or 'module', got '{s}'"),
            }),
        }
    }
}

impl TryFrom<String> for ModuleStyle {
    type Error = ConfigError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where the loader and guard calls are injected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InjectTarget {
    /// The `main` entry of the project manifest.
    Manifest,
    /// An explicit file, relative to the project root.
    Path(PathBuf),
}

impl InjectTarget {
    /// Value that selects [`InjectTarget::Manifest`].
    pub const MANIFEST_SENTINEL: &'static str = "default";
}

impl From<String> for InjectTarget {
    fn from(value: String) -> Self {
        if value == Self::MANIFEST_SENTINEL {
            Self::Manifest
        } else {
            Self::Path(PathBuf::from(value))
        }
    }
}

impl From<InjectTarget> for String {
    fn from(target: InjectTarget) -> Self {
        match target {
            InjectTarget::Manifest => InjectTarget::MANIFEST_SENTINEL.to_string(),
            InjectTarget::Path(path) => path.display().to_string(),
        }
    }
}

impl std::fmt::Display for InjectTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manifest => write!(f, "{}", Self::MANIFEST_SENTINEL),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Global options (console output only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Show info-level messages on the console.
    pub show_logs: bool,
    /// Show warnings on the console.
    pub show_warns: bool,
    /// Explicit console level (0-5), overrides `show_logs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// Also write logs to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            show_logs: true,
            show_warns: true,
            log_level: None,
            log_file: None,
        }
    }
}

impl GlobalConfig {
    /// Console level after applying `log_level` over the `show_logs` toggle.
    #[must_use]
    pub fn console_level(&self) -> LogLevel {
        self.log_level
            .unwrap_or_else(|| LogLevel::from_show_logs(self.show_logs))
    }
}

/// Generation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Project root; relative paths below are resolved against it.
    pub root: PathBuf,
    /// Declaration file.
    pub input: PathBuf,
    /// Generated module path (default: `env_checker.<ext>`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Force TypeScript output.
    pub ts: bool,
    /// Names excluded from the generated module.
    pub skip: SkipList,
    /// Add (`true`) or remove (`false`) the reminder block; unset leaves the
    /// declaration file alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<bool>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            input: PathBuf::from(".env"),
            output: None,
            ts: false,
            skip: SkipList::default(),
            comment: None,
        }
    }
}

impl GenerateConfig {
    /// Dialect of the generated module.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        Dialect::resolve(self.ts, self.output.as_deref())
    }
}

/// Entry injection options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InjectConfig {
    /// Injection target; unset disables injection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<InjectTarget>,
    /// Overrides the module style read from the manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_style: Option<ModuleStyle>,
    /// Project manifest, relative to the root.
    pub manifest: PathBuf,
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            target: None,
            module_style: None,
            manifest: PathBuf::from("package.json"),
        }
    }
}
