// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry file injection.
//!
//! ```text
//! InjectTarget::Manifest --> manifest.main --+
//! InjectTarget::Path     --> root/path ------+--> EntryDescriptor
//!                                                 path, dialect (ext),
//!                                                 style (flag > manifest > script)
//!                                                       |
//!                                                       v
//!   [#!shebang]
//!   <loader line>     require('dotenv').config();  |  import 'dotenv/config';
//!   <guard line>      ...checkEnvAndThrowError(); // env-checker:inject
//!   <original content, unchanged>
//! ```
//!
//! A file that already carries the marker is left alone.

pub mod manifest;

#[cfg(test)]
mod tests;

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::config::paths::ProjectPaths;
use crate::config::types::{Dialect, InjectTarget, ModuleStyle};
use crate::error::{EnvCheckerError, EnvCheckerResult};
use crate::render::GUARD_FUNCTION;
use crate::utility::encoding::{decode_exact, encode_unicode, split_bom};
use crate::utility::fs::{read_bytes, relative_path, write_atomic};

use manifest::ProjectManifest;

/// Trailing comment identifying injected lines.
pub const INJECT_MARKER: &str = "env-checker:inject";

/// Resolved injection target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDescriptor {
    path: PathBuf,
    dialect: Dialect,
    module_style: ModuleStyle,
}

impl EntryDescriptor {
    /// `module_style` is the project style; a `.cjs`/`.cts`/`.mjs`/`.mts`
    /// extension overrides it.
    #[must_use]
    pub fn new(path: PathBuf, module_style: ModuleStyle) -> Self {
        let dialect = Dialect::from_path(&path);
        let module_style = ModuleStyle::for_file(&path, module_style);
        Self {
            path,
            dialect,
            module_style,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[must_use]
    pub const fn module_style(&self) -> ModuleStyle {
        self.module_style
    }

    /// Whether the entry loads modules with `import` statements.
    ///
    /// TypeScript files always do; the compiler maps them to `require` for
    /// script-style projects.
    #[must_use]
    pub fn uses_import_syntax(&self) -> bool {
        self.module_style == ModuleStyle::Module || self.dialect == Dialect::Typed
    }
}

/// Picks the module style: explicit setting, then manifest `type`, then script.
#[must_use]
pub fn detect_module_style(
    manifest: Option<&ProjectManifest>,
    explicit: Option<ModuleStyle>,
) -> ModuleStyle {
    explicit
        .or_else(|| manifest.map(ProjectManifest::module_style))
        .unwrap_or_default()
}

/// Resolves the injection target to an existing file.
///
/// # Errors
///
/// - [`EnvCheckerError::MissingEntry`] if the manifest is absent, has no
///   `main`, or `main` points to a missing file.
/// - [`EnvCheckerError::MissingFile`] if an explicit target does not exist.
pub fn resolve_entry(
    target: &InjectTarget,
    paths: &ProjectPaths,
    manifest: Option<&ProjectManifest>,
    module_style: ModuleStyle,
) -> EnvCheckerResult<EntryDescriptor> {
    let path = match target {
        InjectTarget::Manifest => {
            let manifest = manifest.ok_or_else(|| {
                EnvCheckerError::missing_entry(format!(
                    "{} not found",
                    paths.manifest.display()
                ))
            })?;
            let main = manifest.entry().ok_or_else(|| {
                EnvCheckerError::missing_entry(format!(
                    "{} has no \"main\" field",
                    paths.manifest.display()
                ))
            })?;
            let base = paths.manifest.parent().unwrap_or(paths.root.as_path());
            let path = base.join(main);
            if !path.is_file() {
                return Err(EnvCheckerError::missing_entry(format!(
                    "\"main\" points to {}, which does not exist",
                    path.display()
                )));
            }
            path
        }
        InjectTarget::Path(relative) => {
            let path = paths.in_root(relative);
            if !path.is_file() {
                return Err(EnvCheckerError::missing_file(&path));
            }
            path
        }
    };

    let entry = EntryDescriptor::new(path, module_style);
    debug!(
        path = %entry.path.display(),
        dialect = %entry.dialect,
        style = %entry.module_style,
        "resolved injection target"
    );
    Ok(entry)
}

/// The two lines inserted at the top of the entry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionLines {
    /// Activates `dotenv`.
    pub loader: String,
    /// Imports and immediately calls the guard.
    pub guard: String,
}

impl InjectionLines {
    /// Builds the lines for `entry` importing the module at `generated`.
    ///
    /// `dotenv_path` is the declaration file as seen from the project root,
    /// passed when it is not the default `.env`.
    #[must_use]
    pub fn new(entry: &EntryDescriptor, generated: &Path, dotenv_path: Option<&str>) -> Self {
        let specifier = module_specifier(entry, generated);

        let loader = match (entry.uses_import_syntax(), dotenv_path) {
            (true, None) => "import 'dotenv/config';".to_string(),
            (true, Some(path)) => format!(
                "import {{ config }} from 'dotenv'; config({{ path: '{}' }});",
                escape_single_quoted(path)
            ),
            (false, None) => "require('dotenv').config();".to_string(),
            (false, Some(path)) => format!(
                "require('dotenv').config({{ path: '{}' }});",
                escape_single_quoted(path)
            ),
        };

        let guard = if entry.uses_import_syntax() {
            format!(
                "import {{ {GUARD_FUNCTION} }} from '{specifier}'; {GUARD_FUNCTION}(); // {INJECT_MARKER}"
            )
        } else {
            format!(
                "const {{ {GUARD_FUNCTION} }} = require('{specifier}'); {GUARD_FUNCTION}(); // {INJECT_MARKER}"
            )
        };

        Self { loader, guard }
    }
}

/// Import specifier of `generated` as seen from the entry's directory.
///
/// Script style drops a `.js`/`.ts` extension, which the resolver adds back.
/// Everything else keeps the emitted JavaScript extension (`.ts` -> `.js`,
/// `.mts` -> `.mjs`, `.cts` -> `.cjs`), since resolvers never guess those.
#[must_use]
pub fn module_specifier(entry: &EntryDescriptor, generated: &Path) -> String {
    let from_dir = entry.path.parent().unwrap_or_else(|| Path::new(""));
    let mut rel = relative_path(from_dir, generated);

    let ext = rel.extension().and_then(|e| e.to_str());
    let emitted = match (entry.module_style, ext) {
        (ModuleStyle::Script, Some("js" | "ts")) => Some(""),
        (_, Some("ts")) => Some("js"),
        (_, Some("mts")) => Some("mjs"),
        (_, Some("cts")) => Some("cjs"),
        _ => None,
    };
    if let Some(ext) = emitted {
        rel.set_extension(ext);
    }

    let joined = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    if joined.starts_with("../") {
        joined
    } else {
        format!("./{joined}")
    }
}

/// Inserts `lines` before the first original line of `content`.
///
/// A leading shebang stays first. Returns `None` if `content` already carries
/// [`INJECT_MARKER`].
#[must_use]
pub fn inject_source(content: &str, lines: &InjectionLines) -> Option<String> {
    if content.contains(INJECT_MARKER) {
        return None;
    }

    let (head, body) = if content.starts_with("#!") {
        content
            .find('\n')
            .map_or((content, ""), |pos| content.split_at(pos + 1))
    } else {
        ("", content)
    };

    let mut out = String::with_capacity(content.len() + lines.loader.len() + lines.guard.len() + 3);
    out.push_str(head);
    if !head.is_empty() && !head.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&lines.loader);
    out.push('\n');
    out.push_str(&lines.guard);
    out.push('\n');
    out.push_str(body);
    Some(out)
}

/// Result of [`inject_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    /// The lines were written.
    Injected,
    /// The marker was already present; the file was not touched.
    AlreadyInjected,
}

/// Injects `lines` into the entry file.
///
/// The BOM and encoding of the file are kept; the rest of its bytes come back
/// unchanged.
///
/// # Errors
///
/// Returns an error if the entry cannot be read or written, and
/// [`EnvCheckerError::Undecodable`] if it is not valid text in
/// its encoding.
pub fn inject_entry(entry: &EntryDescriptor, lines: &InjectionLines) -> EnvCheckerResult<InjectOutcome> {
    let bytes = read_bytes(entry.path())?;
    let (encoding, bom, body) = split_bom(&bytes);
    let content = decode_exact(body, encoding)
        .ok_or_else(|| EnvCheckerError::undecodable(entry.path(), encoding.name()))?;

    let Some(updated) = inject_source(&content, lines) else {
        info!(path = %entry.path().display(), "entry already injected, skipping");
        return Ok(InjectOutcome::AlreadyInjected);
    };

    let encoded = encode_unicode(&updated, encoding);
    write_atomic(entry.path(), [bom, encoded.as_slice()].concat())?;
    info!(path = %entry.path().display(), style = %entry.module_style(), "injected env check into entry");
    Ok(InjectOutcome::Injected)
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
