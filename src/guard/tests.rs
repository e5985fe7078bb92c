// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvSnapshot, check_env, missing};
use crate::error::EnvCheckerError;

#[test]
fn test_all_present() {
    let snapshot = EnvSnapshot::from_pairs([("A", "1"), ("B", "2")]);
    assert!(check_env(["A", "B"], &snapshot, ".env").is_ok());
}

#[test]
fn test_first_missing_wins() {
    let snapshot = EnvSnapshot::from_pairs([("B", "2")]);
    let err = check_env(["A", "C"], &snapshot, ".env").unwrap_err();

    match &err {
        EnvCheckerError::MissingVariable { name, declaration_file } => {
            assert_eq!(name, "A");
            assert_eq!(declaration_file, ".env");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("A"));
    assert!(!err.to_string().contains("C"));
}

#[test]
fn test_empty_value_is_missing() {
    let snapshot = EnvSnapshot::from_pairs([("A", ""), ("B", "2")]);
    assert!(!snapshot.is_set("A"));
    assert_eq!(snapshot.get("A"), Some(""));

    let err = check_env(["B", "A"], &snapshot, "app.env").unwrap_err();
    assert!(err.to_string().contains("Missing required environment variable: A"));
    assert!(err.to_string().contains("app.env"));
}

#[test]
fn test_empty_list_passes() {
    assert!(check_env(std::iter::empty(), &EnvSnapshot::default(), ".env").is_ok());
}

#[test]
fn test_missing_lists_all_in_order() {
    let snapshot = EnvSnapshot::from_pairs([("B", "2")]);
    assert_eq!(missing(["C", "B", "A"], &snapshot), vec!["C", "A"]);
}

#[test]
fn test_capture_sees_process_environment() {
    let snapshot = EnvSnapshot::capture();
    assert_eq!(snapshot.len(), std::env::vars_os().count());
}
