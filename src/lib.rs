// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          generate / check / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, env, CLI layers   |
//!              '--+--------+--------+------'
//!                 |        |        |
//!                 v        v        v
//!          declaration  render   inject
//!          .env names   JS / TS  entry file
//!                 |                 |
//!                 v                 v
//!             annotate         manifest
//!
//!   +-----------------------------------------+
//!   |  guard   runtime presence check         |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod annotate;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod declaration;
pub mod error;
pub mod guard;
pub mod inject;
pub mod logging;
pub mod render;
pub mod utility;
