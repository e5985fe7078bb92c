// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate command: the full pipeline.
//!
//! ```text
//! ProjectPaths --> load_declarations --> without(skip)
//!                                             |
//!   ProjectManifest::load_optional ---+       v
//!                                     +--> RenderedModule --> write output
//!                                     |
//!                                     |    comment set? --> annotate_file(input)
//!                                     |
//!                                     +--> inject set?  --> resolve_entry --> inject_entry
//! ```
//!
//! A failing step stops the run; files written before it stay written.


use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::annotate::annotate_file;
use crate::config::Config;
use crate::config::paths::ProjectPaths;
use crate::config::types::{Dialect, ModuleStyle};
use crate::declaration::load_declarations;
use crate::error::Result;
use crate::inject::manifest::ProjectManifest;
use crate::inject::{InjectOutcome, InjectionLines, detect_module_style, inject_entry, resolve_entry};
use crate::render::{RenderOptions, RenderedModule};

/// Default declaration file; other inputs are passed to `dotenv` explicitly.
const DEFAULT_INPUT: &str = ".env";

/// What a generate run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Generated module path.
    pub output: PathBuf,
    pub dialect: Dialect,
    /// Style of the generated module; its extension can override the project.
    pub module_style: ModuleStyle,
    /// Names embedded in the generated module.
    pub variables: Vec<String>,
    /// Declared names left out by the skip list.
    pub skipped: Vec<String>,
    /// Whether the annotator rewrote the declaration file.
    pub declaration_rewritten: bool,
    /// `None` when injection was not requested.
    pub injection: Option<InjectOutcome>,
}

/// Runs the generate pipeline.
///
/// # Errors
///
/// Returns an error if the declaration file is missing, a file cannot be
/// read or written, or the injection target cannot be resolved.
pub fn run_generate(config: &Config) -> Result<GenerateReport> {
    let dialect = config.generate.dialect();
    let paths = ProjectPaths::resolve(config, dialect).into_absolute()?;
    debug!(
        root = %paths.root.display(),
        input = %paths.input.display(),
        output = %paths.output.display(),
        "resolved project paths"
    );

    let declared = load_declarations(&paths.input)
        .with_context(|| format!("failed to load declarations from {}", paths.input.display()))?;
    let names = declared.without(&config.generate.skip);
    let skipped: Vec<String> = declared
        .iter()
        .filter(|name| !names.contains(name))
        .map(str::to_string)
        .collect();

    let manifest = load_manifest(config, &paths)?;
    let project_style = detect_module_style(manifest.as_ref(), config.inject.module_style);
    let module_style = ModuleStyle::for_file(&paths.output, project_style);

    let options = RenderOptions::builder()
        .dialect(dialect)
        .module_style(module_style)
        .declaration_file(paths.input_file_name())
        .build();
    let module = RenderedModule::new(&names, &options);
    module
        .write_to(&paths.output)
        .with_context(|| format!("failed to write {}", paths.output.display()))?;

    let declaration_rewritten = match config.generate.comment {
        Some(enabled) => annotate_file(&paths.input, enabled)?,
        None => false,
    };

    let injection = match &config.inject.target {
        Some(target) => {
            let entry = resolve_entry(target, &paths, manifest.as_ref(), project_style)
                .context("failed to resolve injection target")?;
            let dotenv_path = dotenv_path(&config.generate.input);
            let lines = InjectionLines::new(&entry, &paths.output, dotenv_path.as_deref());
            Some(inject_entry(&entry, &lines)?)
        }
        None => None,
    };

    let report = GenerateReport {
        output: paths.output,
        dialect,
        module_style,
        variables: names.names().to_vec(),
        skipped,
        declaration_rewritten,
        injection,
    };

    info!(
        output = %report.output.display(),
        dialect = %report.dialect,
        style = %report.module_style,
        variables = report.variables.len(),
        skipped = ?report.skipped,
        declaration_rewritten = report.declaration_rewritten,
        injection = ?report.injection,
        "generated env checker"
    );

    Ok(report)
}

/// Reads the manifest. A broken manifest only matters when injecting.
fn load_manifest(config: &Config, paths: &ProjectPaths) -> Result<Option<ProjectManifest>> {
    match ProjectManifest::load_optional(&paths.manifest) {
        Ok(manifest) => Ok(manifest),
        Err(e) if config.inject.target.is_none() => {
            warn!(error = %e, "ignoring unreadable project manifest");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Declaration path handed to `dotenv` when it is not the default file.
fn dotenv_path(input: &Path) -> Option<String> {
    (input != Path::new(DEFAULT_INPUT)).then(|| input.to_string_lossy().replace('\\', "/"))
}
