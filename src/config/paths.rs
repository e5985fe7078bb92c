// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path resolution against the project root.
//!
//! ```text
//! root/
//!   .env            (generate.input)
//!   env_checker.js  (generate.output, default per dialect)
//!   package.json    (inject.manifest)
//! ```
//!
//! Absolute paths are kept as they are; relative ones are joined to `root`.

use std::path::{Path, PathBuf};

use super::Config;
use super::types::Dialect;
use crate::error::{EnvCheckerError, EnvCheckerResult};

/// Paths of every file a run reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Project root.
    pub root: PathBuf,
    /// Declaration file.
    pub input: PathBuf,
    /// Generated module.
    pub output: PathBuf,
    /// Project manifest.
    pub manifest: PathBuf,
}

impl ProjectPaths {
    /// Resolves all paths from `config` for the given output dialect.
    #[must_use]
    pub fn resolve(config: &Config, dialect: Dialect) -> Self {
        let root = config.generate.root.clone();
        let output = config
            .generate
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(dialect.default_file_name()));

        Self {
            input: join_root(&root, &config.generate.input),
            output: join_root(&root, &output),
            manifest: join_root(&root, &config.inject.manifest),
            root,
        }
    }

    /// Resolves a path given relative to the project root.
    #[must_use]
    pub fn in_root(&self, path: &Path) -> PathBuf {
        join_root(&self.root, path)
    }

    /// Same paths made absolute against the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`EnvCheckerError::Read`] if the working directory cannot be
    /// determined.
    pub fn into_absolute(self) -> EnvCheckerResult<Self> {
        let absolute =
            |path: PathBuf| std::path::absolute(&path).map_err(|e| EnvCheckerError::read(&path, e));
        Ok(Self {
            root: absolute(self.root)?,
            input: absolute(self.input)?,
            output: absolute(self.output)?,
            manifest: absolute(self.manifest)?,
        })
    }

    /// File name of the declaration file, as shown in generated messages.
    #[must_use]
    pub fn input_file_name(&self) -> String {
        self.input.file_name().map_or_else(
            || self.input.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

fn join_root(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
