// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers shared by the generation steps.
//!
//! ```text
//! read_bytes()        raw bytes, for content that is written back
//! read_text()         bytes --> decode_text() --> String
//! write_atomic()      canonicalize --> NamedTempFile (same dir, same mode) --> persist()
//! write_if_changed()  compare, then write_atomic()
//! relative_path()     lexical diff of two paths under the same root
//! ```
//!
//! Writes are whole-file replacements. There is no locking: one invocation
//! per project directory at a time.

use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{EnvCheckerError, EnvCheckerResult};
use crate::utility::encoding::{decode_text, detected_encoding};

/// Reads the raw bytes of a file.
///
/// # Errors
///
/// Returns [`EnvCheckerError::MissingFile`] if the file does not exist and
/// [`EnvCheckerError::Read`] for any other I/O failure.
pub fn read_bytes(path: &Path) -> EnvCheckerResult<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => {
            debug!(path = %path.display(), encoding = detected_encoding(&bytes), "read file");
            Ok(bytes)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(EnvCheckerError::missing_file(path)),
        Err(e) => Err(EnvCheckerError::read(path, e)),
    }
}

/// Reads a text file, decoding it with [`decode_text`].
///
/// Lossy: only for content that is parsed, never for content written back.
///
/// # Errors
///
/// Same as [`read_bytes`].
pub fn read_text(path: &Path) -> EnvCheckerResult<String> {
    read_bytes(path).map(|bytes| decode_text(&bytes).into_owned())
}

/// Replaces the content of `path` with `contents`.
///
/// The data goes to a temporary file in the destination directory first and
/// is then renamed over the target, so readers never observe a partial file.
/// Missing parent directories are created.
///
/// An existing file keeps its permissions. A symlink is followed and its
/// target is replaced; the link itself stays in place.
///
/// # Errors
///
/// Returns [`EnvCheckerError::Write`] if the directory cannot be created, the
/// temporary file cannot be written, or the rename fails.
pub fn write_atomic(path: &Path, contents: impl AsRef<[u8]>) -> EnvCheckerResult<()> {
    let contents = contents.as_ref();

    let (target, permissions) = match std::fs::canonicalize(path) {
        Ok(real) => {
            let permissions = std::fs::metadata(&real)
                .map_err(|e| EnvCheckerError::write(path, e))?
                .permissions();
            (real, Some(permissions))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => (path.to_path_buf(), None),
        Err(e) => return Err(EnvCheckerError::write(path, e)),
    };

    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent).map_err(|e| EnvCheckerError::write(path, e))?;

    let mut file = NamedTempFile::new_in(parent).map_err(|e| EnvCheckerError::write(path, e))?;
    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|e| EnvCheckerError::write(path, e))?;
    if let Some(permissions) = permissions {
        file.as_file()
            .set_permissions(permissions)
            .map_err(|e| EnvCheckerError::write(path, e))?;
    }
    file.persist(&target)
        .map_err(|e| EnvCheckerError::write(path, e.error))?;

    debug!(path = %path.display(), target = %target.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Writes `new` to `path` only when it differs from `current`.
///
/// Returns `true` if the file was written.
///
/// # Errors
///
/// Propagates [`write_atomic`] failures.
pub fn write_if_changed(
    path: &Path,
    current: impl AsRef<[u8]>,
    new: impl AsRef<[u8]>,
) -> EnvCheckerResult<bool> {
    if current.as_ref() == new.as_ref() {
        debug!(path = %path.display(), "content unchanged, skipping write");
        return Ok(false);
    }
    write_atomic(path, new)?;
    Ok(true)
}

/// Lexically normalizes a path: drops `.` and folds `..` where possible.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

/// Path of `target` relative to the directory `from_dir`.
///
/// Both paths must be expressed against the same base (both absolute, or
/// both relative to the project root).
#[must_use]
pub fn relative_path(from_dir: &Path, target: &Path) -> PathBuf {
    let from = normalize(from_dir);
    let to = normalize(target);
    let from: Vec<_> = from.components().collect();
    let to: Vec<_> = to.components().collect();

    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..from.len() {
        rel.push("..");
    }
    for component in &to[common..] {
        rel.push(component.as_os_str());
    }
    rel
}

#[cfg(test)]
mod tests;
