// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_text()   BOM sniffing (UTF-8 / UTF-16 LE/BE) --> UTF-8
//!   split_bom() / decode_exact() / encode_unicode()   lossless rewrites
//! fs
//!   read_bytes()       MissingFile / Read errors
//!   read_text()        read_bytes() + decode_text()
//!   write_atomic()     temp file + persist (keeps mode, follows symlinks)
//!   write_if_changed() skip identical content
//!   relative_path()    lexical diff of two paths
//! ```

pub mod encoding;
pub mod fs;
