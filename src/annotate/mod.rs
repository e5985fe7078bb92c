// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reminder block at the top of the declaration file.
//!
//! ```text
//!            content starts with block?
//!               yes              no
//! enabled   unchanged        block + content
//! disabled  content - block  unchanged
//! ```
//!
//! The file is rewritten only when the result differs from what is on disk.
//! Work happens on raw bytes after any BOM, so values in other encodings and
//! the BOM itself survive the round trip.

use std::borrow::Cow;
use std::path::Path;

use tracing::{debug, info};

use crate::error::EnvCheckerResult;
use crate::utility::encoding::{encode_unicode, split_bom};
use crate::utility::fs::{read_bytes, write_if_changed};

/// Reminder prepended to the declaration file.
///
/// Starts with a newline; every other line is a `#` comment, so the parser
/// skips it.
pub const ENV_COMMENT_BLOCK: &str = "
# # # # # # # # # # # # # # # # # # # # # # # # # # # # # # # #
#                                                             #
#   Always run `env-checker` whenever you add or delete any   #
#   environment variable. This keeps ENV_LIST in sync with    #
#   this file so missing values are caught at startup.        #
#                                                             #
#   Keep the ENV_LIST array up to date in                     #
#   env_checker.ts (or env_checker.js).                       #
#                                                             #
#   Never skip required or sensitive environment values.      #
#                                                             #
# # # # # # # # # # # # # # # # # # # # # # # # # # # # # # # #
";

/// Adds or removes [`ENV_COMMENT_BLOCK`] at the start of `content`.
///
/// Borrowed when nothing changes. Applying the same flag twice is the same as
/// applying it once, and `true` followed by `false` restores the input.
#[must_use]
pub fn apply_comment(content: &str, enabled: bool) -> Cow<'_, str> {
    let annotated = content.starts_with(ENV_COMMENT_BLOCK);
    match (enabled, annotated) {
        (true, false) => Cow::Owned(format!("{ENV_COMMENT_BLOCK}{content}")),
        (false, true) => Cow::Borrowed(&content[ENV_COMMENT_BLOCK.len()..]),
        _ => Cow::Borrowed(content),
    }
}

/// Byte-level [`apply_comment`] with an already encoded `block`.
fn apply_comment_bytes<'a>(content: &'a [u8], block: &[u8], enabled: bool) -> Cow<'a, [u8]> {
    let annotated = content.starts_with(block);
    match (enabled, annotated) {
        (true, false) => Cow::Owned([block, content].concat()),
        (false, true) => Cow::Borrowed(&content[block.len()..]),
        _ => Cow::Borrowed(content),
    }
}

/// Applies [`apply_comment`] to the file at `path`.
///
/// The block is encoded like the file (UTF-8, or UTF-16 when a BOM says so)
/// and placed after the BOM. Nothing else in the file is decoded.
///
/// Returns `true` when the file was rewritten.
///
/// # Errors
///
/// Returns [`crate::error::EnvCheckerError::MissingFile`] if the file does not
/// exist, or a read/write error from the filesystem.
pub fn annotate_file(path: &Path, enabled: bool) -> EnvCheckerResult<bool> {
    let current = read_bytes(path)?;
    let (encoding, bom, body) = split_bom(&current);
    let block = encode_unicode(ENV_COMMENT_BLOCK, encoding);
    let toggled = apply_comment_bytes(body, &block, enabled);
    let updated = [bom, &*toggled].concat();
    let written = write_if_changed(path, &current, &updated)?;

    if written {
        let action = if enabled { "added" } else { "removed" };
        info!(path = %path.display(), "reminder comment {action}");
    } else {
        debug!(path = %path.display(), enabled, "reminder comment already in place");
    }
    Ok(written)
}
