// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Generate (default) | Check | Options | Version
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use env_checker_rs::cli::{self, Cli, Command};
use env_checker_rs::cmd::check::run_check_command;
use env_checker_rs::cmd::config::run_options_command;
use env_checker_rs::cmd::generate::run_generate;
use env_checker_rs::config::loader::ConfigLoader;
use env_checker_rs::config::types::GlobalConfig;
use env_checker_rs::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use env_checker_rs::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if cli.command == Some(Command::Version) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let (config, config_files) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    for line in &config_files {
        tracing::debug!("loaded config {line}");
    }

    dispatch_command(cli.command, &config)
}

fn build_log_config(global: &GlobalConfig) -> LogConfig {
    let console_level = global.console_level();
    let file_level = console_level.max(LogLevel::DEBUG);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .with_show_warnings(global.show_warns)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(command: Option<Command>, config: &Config) -> ExitCode {
    let result = match command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Check) => run_check_command(config),
        Some(Command::Generate) | None => run_generate(config).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(cli: &Cli) -> env_checker_rs::error::Result<ConfigLoader> {
    let root = cli.generate.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut loader = ConfigLoader::new().add_toml_file_optional(root.join(CONFIG_FILE_NAME));
    for path in &cli.global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in cli.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn load_config(cli: &Cli) -> env_checker_rs::error::Result<(Config, Vec<String>)> {
    let loader = build_config_loader(cli)?;
    let files = loader.format_loaded_files();
    Ok((loader.build()?, files))
}
