// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declaration file parsing and key filtering.
//!
//! ```text
//! .env text
//!   for each line: trim
//!     ""            --> skip
//!     "# ..."       --> skip (includes the reminder block)
//!     "export K=V"  --> "K=V"
//!     "=V" / "junk" --> skip (tolerated, logged at debug)
//!     "K=V"         --> K   (first occurrence wins)
//!        |
//!        v
//!  DeclarationSet --without(&SkipList)--> DeclarationSet
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::EnvCheckerResult;
use crate::utility::fs::read_text;

/// Ordered set of variable names declared in a declaration file.
///
/// Insertion order is preserved and every name appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationSet {
    names: Vec<String>,
}

impl DeclarationSet {
    /// Builds a set from names, keeping the first occurrence of duplicates
    /// and dropping empty names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        let mut seen = HashSet::new();
        for name in names {
            let name = name.into();
            if name.is_empty() {
                continue;
            }
            if seen.insert(name.clone()) {
                set.names.push(name);
            } else {
                debug!(name = %name, "duplicate declaration ignored, first occurrence wins");
            }
        }
        set
    }

    /// Names in declaration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns this set minus every name in `skip`, order preserved.
    ///
    /// Skip entries that are not declared are ignored.
    #[must_use]
    pub fn without(&self, skip: &SkipList) -> Self {
        for name in skip.iter() {
            if !self.contains(name) {
                debug!(name = %name, "skip entry is not declared, nothing to remove");
            }
        }
        Self {
            names: self
                .names
                .iter()
                .filter(|name| !skip.contains(name))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DeclarationSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Extracts the variable name of a single declaration line.
///
/// Returns `None` for blank lines, comments and malformed assignments.
#[must_use]
pub fn parse_line(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let line = match line.strip_prefix("export") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    };
    let (key, _value) = line.split_once('=')?;
    let key = key.trim();
    (!key.is_empty()).then_some(key)
}

/// Parses declaration text into an ordered set of names.
///
/// Malformed lines are skipped, never reported as errors. Values are not
/// inspected.
#[must_use]
pub fn parse_declarations(text: &str) -> DeclarationSet {
    let names = text.lines().enumerate().filter_map(|(index, line)| {
        let name = parse_line(line);
        if name.is_none() {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                debug!(line = index + 1, "ignoring malformed declaration line");
            }
        }
        name
    });
    DeclarationSet::from_names(names)
}

/// Reads and parses the declaration file at `path`.
///
/// # Errors
///
/// Returns [`crate::error::EnvCheckerError::MissingFile`] if the file does not
/// exist, and [`crate::error::EnvCheckerError::Read`] if it cannot be read.
pub fn load_declarations(path: &Path) -> EnvCheckerResult<DeclarationSet> {
    let text = read_text(path)?;
    let set = parse_declarations(&text);
    debug!(path = %path.display(), count = set.len(), "parsed declaration file");
    Ok(set)
}

/// Names excluded from the generated module.
///
/// Membership is an exact, case-sensitive match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipList {
    names: Vec<String>,
}

impl SkipList {
    /// Builds a skip list from a comma-separated string.
    ///
    /// Whitespace around names is trimmed and empty entries are dropped.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::from_names(value.split(','))
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !list.contains(name) {
                list.names.push(name.to_string());
            }
        }
        list
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for SkipList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(","))
    }
}

impl Serialize for SkipList {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.names)
    }
}

/// Accepts either `"A,B"` or `["A", "B"]`.
impl<'de> Deserialize<'de> for SkipList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Joined(String),
            List(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Joined(value) => Self::parse(&value),
            Raw::List(names) => Self::from_names(names),
        })
    }
}
