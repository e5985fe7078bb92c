// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use std::path::PathBuf;

use clap::Parser;
use env_checker_rs::cli::{Cli, Command};
use env_checker_rs::config::Config;
use env_checker_rs::config::types::{InjectTarget, ModuleStyle};

fn config_from(args: &[&str]) -> Config {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    let mut loader = Config::builder();
    for (key, value) in cli.to_config_overrides() {
        loader = loader.set(key, value).unwrap();
    }
    loader.build().unwrap()
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["env-checker", "-v"]).unwrap();
    assert_eq!(cli.command, Some(Command::Version));
}

#[test]
fn cli_generate_is_optional() {
    let implicit = Cli::try_parse_from(["env-checker", "--ts"]).unwrap();
    let explicit = Cli::try_parse_from(["env-checker", "generate", "--ts"]).unwrap();
    assert_eq!(implicit.command, None);
    assert_eq!(explicit.command, Some(Command::Generate));
    assert_eq!(implicit.generate.ts, explicit.generate.ts);
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["env-checker", "build"]).is_err());
}

// =============================================================================
// Flags to configuration
// =============================================================================

#[test]
fn cli_flags_become_config() {
    let config = config_from(&[
        "env-checker",
        "--input",
        ".env.local",
        "--skip",
        "SECRET",
        "--comment",
        "true",
        "--inject",
        "default",
        "--module-style",
        "esm",
        "--show-warns",
        "false",
    ]);

    assert_eq!(config.generate.input, PathBuf::from(".env.local"));
    assert!(config.generate.skip.contains("SECRET"));
    assert_eq!(config.generate.comment, Some(true));
    assert_eq!(config.inject.target, Some(InjectTarget::Manifest));
    assert_eq!(config.inject.module_style, Some(ModuleStyle::Module));
    assert!(!config.global.show_warns);
}

#[test]
fn cli_without_flags_keeps_defaults() {
    let config = config_from(&["env-checker"]);
    assert_eq!(config.generate.input, PathBuf::from(".env"));
    assert_eq!(config.generate.comment, None);
    assert_eq!(config.inject.target, None);
}
