// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding for files read from a project.
//!
//! ```text
//! bytes --(BOM?)--> UTF-8 / UTF-16LE / UTF-16BE decoder --> String
//!       --(none)--> lossy UTF-8
//!
//! rewrite: split_bom() --> decode_exact() --> edit --> encode_unicode() --> BOM + bytes
//! ```
//!
//! Uses `encoding_rs`. Reading for parsing maps invalid sequences to U+FFFD;
//! rewriting refuses them instead.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::borrow::Cow;

/// Decodes file bytes to UTF-8, honoring a leading byte order mark.
///
/// The BOM itself is not part of the returned text.
///
/// # Example
/// ```
/// use env_checker_rs::utility::encoding::decode_text;
///
/// let bytes = b"\xef\xbb\xbfTZ=UTC";
/// assert_eq!(decode_text(bytes), "TZ=UTC");
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => {
            let (result, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
            result
        }
        None => String::from_utf8_lossy(bytes),
    }
}

/// Name of the encoding [`decode_text`] would pick for `bytes`.
#[must_use]
pub fn detected_encoding(bytes: &[u8]) -> &'static str {
    Encoding::for_bom(bytes).map_or("UTF-8", |(encoding, _)| encoding.name())
}

/// Splits a leading byte order mark off `bytes`.
///
/// Returns the encoding the BOM announces (UTF-8 when there is none), the
/// BOM bytes and the remaining body.
#[must_use]
pub fn split_bom(bytes: &[u8]) -> (&'static Encoding, &[u8], &[u8]) {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let (bom, body) = bytes.split_at(bom_len);
    (encoding, bom, body)
}

/// Decodes a BOM-less `body` without replacement.
///
/// `None` when the body is not valid in `encoding`. A `Some` result encodes
/// back to exactly `body` through [`encode_unicode`].
#[must_use]
pub fn decode_exact<'a>(body: &'a [u8], encoding: &'static Encoding) -> Option<Cow<'a, str>> {
    encoding.decode_without_bom_handling_and_without_replacement(body)
}

/// Encodes `text` in one of the encodings a BOM can announce.
#[must_use]
pub fn encode_unicode(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    if encoding == UTF_16LE {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    } else if encoding == UTF_16BE {
        text.encode_utf16().flat_map(u16::to_be_bytes).collect()
    } else {
        text.as_bytes().to_vec()
    }
}
