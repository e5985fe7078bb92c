// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project manifest (`package.json`) reading.
//!
//! Only `main` and `type` are used; every other field is ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::types::ModuleStyle;
use crate::error::{EnvCheckerError, EnvCheckerResult};
use crate::utility::fs::read_text;

/// Subset of `package.json` needed for injection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Entry file, relative to the manifest directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    /// `"module"` or `"commonjs"`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
}

impl ProjectManifest {
    /// Parses manifest JSON. `path` is only used in the error message.
    ///
    /// # Errors
    ///
    /// Returns [`EnvCheckerError::Manifest`] if `content` is not a JSON object
    /// with string `main`/`type` fields.
    pub fn parse(content: &str, path: &Path) -> EnvCheckerResult<Self> {
        serde_json::from_str(content).map_err(|e| EnvCheckerError::Manifest {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Reads the manifest at `path`, or `None` if there is no such file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> EnvCheckerResult<Option<Self>> {
        match read_text(path) {
            Ok(content) => {
                let manifest = Self::parse(&content, path)?;
                debug!(
                    path = %path.display(),
                    main = ?manifest.main,
                    module_type = ?manifest.module_type,
                    "read project manifest"
                );
                Ok(Some(manifest))
            }
            Err(EnvCheckerError::MissingFile { .. }) => {
                debug!(path = %path.display(), "no project manifest");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Declared entry, if present and non-blank.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        self.main
            .as_deref()
            .map(str::trim)
            .filter(|main| !main.is_empty())
    }

    /// Module style declared by the `type` field.
    #[must_use]
    pub fn module_style(&self) -> ModuleStyle {
        ModuleStyle::from_manifest_type(self.module_type.as_deref())
    }
}
