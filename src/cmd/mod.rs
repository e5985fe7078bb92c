// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> Config --> cmd::run_* handlers
//!   generate, check, options
//! ```

pub mod check;
pub mod config;
pub mod generate;
