// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{normalize, read_bytes, read_text, relative_path, write_atomic, write_if_changed};
use crate::error::EnvCheckerError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_read_text_missing_file() {
    let temp = temp_dir();
    let err = read_text(&temp.path().join(".env")).unwrap_err();
    assert!(matches!(err, EnvCheckerError::MissingFile { .. }));
}

#[test]
fn test_write_atomic_creates_parents() {
    let temp = temp_dir();
    let target = temp.path().join("src/generated/env_checker.ts");

    write_atomic(&target, "export {};\n").unwrap();

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "export {};\n");
}

#[test]
fn test_write_atomic_replaces_content() {
    let temp = temp_dir();
    let target = temp.path().join("out.js");
    std::fs::write(&target, "old content that is longer").unwrap();

    write_atomic(&target, "new").unwrap();

    assert_eq!(read_text(&target).unwrap(), "new");
}

#[test]
fn test_write_if_changed_skips_identical() {
    let temp = temp_dir();
    let target = temp.path().join(".env");

    assert!(!write_if_changed(&target, "A=1", "A=1").unwrap());
    assert!(!target.exists(), "identical content must not touch the file");

    assert!(write_if_changed(&target, "A=1", "B=2").unwrap());
    assert_eq!(read_text(&target).unwrap(), "B=2");
}

#[test]
fn test_write_atomic_keeps_raw_bytes() {
    let temp = temp_dir();
    let target = temp.path().join(".env");
    let bytes = b"\xef\xbb\xbfGREETING=caf\xe9\n";

    write_atomic(&target, bytes).unwrap();

    assert_eq!(read_bytes(&target).unwrap(), bytes);
}

#[cfg(unix)]
#[test]
fn test_write_atomic_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    let target = temp.path().join("server.js");
    std::fs::write(&target, "#!/usr/bin/env node\n").unwrap();
    std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o755)).unwrap();

    write_atomic(&target, "#!/usr/bin/env node\nmain();\n").unwrap();

    let mode = std::fs::metadata(&target).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[cfg(unix)]
#[test]
fn test_write_atomic_follows_symlink() {
    let temp = temp_dir();
    let shared = temp.path().join("shared");
    std::fs::create_dir(&shared).unwrap();
    let real = shared.join("app.env");
    std::fs::write(&real, "A=1\n").unwrap();
    let link = temp.path().join(".env");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    write_atomic(&link, "B=2\n").unwrap();

    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(std::fs::read_to_string(&real).unwrap(), "B=2\n");
}

#[test]
fn test_normalize() {
    assert_eq!(normalize(Path::new("./src/../lib/./index.js")), PathBuf::from("lib/index.js"));
    assert_eq!(normalize(Path::new("../a/b/..")), PathBuf::from("../a"));
}

#[test]
fn test_relative_path() {
    let cases = [
        ("", "env_checker.js", "env_checker.js"),
        ("src", "env_checker.js", "../env_checker.js"),
        ("src/server", "src/env_checker.ts", "../env_checker.ts"),
        ("src", "src/lib/env.js", "lib/env.js"),
    ];
    for (from, to, expected) in cases {
        assert_eq!(
            relative_path(Path::new(from), Path::new(to)),
            PathBuf::from(expected),
            "from {from:?} to {to:?}"
        );
    }
}
