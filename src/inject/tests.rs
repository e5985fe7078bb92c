// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::manifest::ProjectManifest;
use super::{
    EntryDescriptor, INJECT_MARKER, InjectOutcome, InjectionLines, detect_module_style,
    inject_entry, inject_source, module_specifier, resolve_entry,
};
use crate::config::paths::ProjectPaths;
use crate::config::types::{Dialect, InjectTarget, ModuleStyle};
use crate::error::EnvCheckerError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn project() -> (TempDir, ProjectPaths) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let root = temp.path().to_path_buf();
    let paths = ProjectPaths {
        input: root.join(".env"),
        output: root.join("env_checker.js"),
        manifest: root.join("package.json"),
        root,
    };
    (temp, paths)
}

fn manifest(main: Option<&str>, module_type: Option<&str>) -> ProjectManifest {
    ProjectManifest {
        main: main.map(str::to_string),
        module_type: module_type.map(str::to_string),
    }
}

fn entry(path: &str, style: ModuleStyle) -> EntryDescriptor {
    EntryDescriptor::new(PathBuf::from(path), style)
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

#[test]
fn test_manifest_parse_ignores_other_fields() {
    let json = r#"{"name": "app", "main": "src/index.js", "type": "module", "dependencies": {}}"#;
    let parsed = ProjectManifest::parse(json, Path::new("package.json")).unwrap();
    assert_eq!(parsed.main.as_deref(), Some("src/index.js"));
    assert_eq!(parsed.module_style(), ModuleStyle::Module);
}

#[test]
fn test_manifest_parse_invalid_json() {
    let err = ProjectManifest::parse("{ not json", Path::new("package.json")).unwrap_err();
    assert!(matches!(err, EnvCheckerError::Manifest { .. }));
}

#[test]
fn test_manifest_entry_blank_is_none() {
    assert_eq!(manifest(Some("  "), None).entry(), None);
    assert_eq!(manifest(None, None).entry(), None);
    assert_eq!(manifest(Some("index.js"), None).entry(), Some("index.js"));
}

#[test]
fn test_manifest_load_optional() {
    let (_temp, paths) = project();
    assert_eq!(ProjectManifest::load_optional(&paths.manifest).unwrap(), None);

    std::fs::write(&paths.manifest, r#"{"main": "index.js"}"#).unwrap();
    let loaded = ProjectManifest::load_optional(&paths.manifest).unwrap().unwrap();
    assert_eq!(loaded.entry(), Some("index.js"));
    assert_eq!(loaded.module_style(), ModuleStyle::Script);
}

// ---------------------------------------------------------------------------
// Module style / resolution
// ---------------------------------------------------------------------------

#[test]
fn test_detect_module_style_precedence() {
    let esm = manifest(None, Some("module"));
    assert_eq!(detect_module_style(None, None), ModuleStyle::Script);
    assert_eq!(detect_module_style(Some(&esm), None), ModuleStyle::Module);
    assert_eq!(
        detect_module_style(Some(&esm), Some(ModuleStyle::Script)),
        ModuleStyle::Script
    );
}

#[test]
fn test_resolve_manifest_without_manifest() {
    let (_temp, paths) = project();
    let err = resolve_entry(&InjectTarget::Manifest, &paths, None, ModuleStyle::Script).unwrap_err();
    assert!(matches!(err, EnvCheckerError::MissingEntry { .. }));
}

#[test]
fn test_resolve_manifest_without_main() {
    let (_temp, paths) = project();
    let m = manifest(None, Some("module"));
    let err = resolve_entry(&InjectTarget::Manifest, &paths, Some(&m), ModuleStyle::Script).unwrap_err();
    assert!(matches!(err, EnvCheckerError::MissingEntry { .. }));
    assert!(err.to_string().contains("main"));
}

#[test]
fn test_resolve_manifest_main_missing_file() {
    let (_temp, paths) = project();
    let m = manifest(Some("src/index.js"), None);
    let err = resolve_entry(&InjectTarget::Manifest, &paths, Some(&m), ModuleStyle::Script).unwrap_err();
    assert!(matches!(err, EnvCheckerError::MissingEntry { .. }));
    assert!(err.to_string().contains("index.js"));
}

#[test]
fn test_resolve_manifest_main() {
    let (_temp, paths) = project();
    std::fs::create_dir_all(paths.root.join("src")).unwrap();
    std::fs::write(paths.root.join("src/index.ts"), "").unwrap();
    let m = manifest(Some("src/index.ts"), None);

    let resolved = resolve_entry(&InjectTarget::Manifest, &paths, Some(&m), ModuleStyle::Module).unwrap();

    assert_eq!(resolved.path(), paths.root.join("src/index.ts"));
    assert_eq!(resolved.dialect(), Dialect::Typed);
    assert_eq!(resolved.module_style(), ModuleStyle::Module);
}

#[test]
fn test_resolve_explicit_path_missing() {
    let (_temp, paths) = project();
    let target = InjectTarget::Path(PathBuf::from("server.js"));
    let err = resolve_entry(&target, &paths, None, ModuleStyle::Script).unwrap_err();
    assert!(matches!(err, EnvCheckerError::MissingFile { .. }));
}

#[test]
fn test_resolve_explicit_path_ignores_manifest() {
    let (_temp, paths) = project();
    std::fs::write(paths.root.join("server.js"), "").unwrap();
    let m = manifest(Some("missing.js"), None);
    let target = InjectTarget::Path(PathBuf::from("server.js"));

    let resolved = resolve_entry(&target, &paths, Some(&m), ModuleStyle::Script).unwrap();

    assert_eq!(resolved.path(), paths.root.join("server.js"));
    assert_eq!(resolved.dialect(), Dialect::Dynamic);
}

// ---------------------------------------------------------------------------
// Specifier and lines
// ---------------------------------------------------------------------------

#[test]
fn test_specifier_same_directory() {
    let e = entry("app/index.js", ModuleStyle::Script);
    assert_eq!(module_specifier(&e, Path::new("app/env_checker.js")), "./env_checker");
}

#[test]
fn test_specifier_parent_directory() {
    let e = entry("app/src/index.js", ModuleStyle::Script);
    assert_eq!(module_specifier(&e, Path::new("app/env_checker.js")), "../env_checker");
}

#[test]
fn test_specifier_module_style_uses_js_extension() {
    let e = entry("app/src/main.ts", ModuleStyle::Module);
    assert_eq!(
        module_specifier(&e, Path::new("app/src/lib/env_checker.ts")),
        "./lib/env_checker.js"
    );
    let e = entry("app/index.mjs", ModuleStyle::Module);
    assert_eq!(module_specifier(&e, Path::new("app/env_checker.js")), "./env_checker.js");
}

#[test]
fn test_specifier_script_style_keeps_explicit_extensions() {
    let e = entry("app/index.js", ModuleStyle::Script);
    assert_eq!(module_specifier(&e, Path::new("app/env_checker.cjs")), "./env_checker.cjs");
    let e = entry("app/index.cts", ModuleStyle::Script);
    assert_eq!(module_specifier(&e, Path::new("app/env_checker.cts")), "./env_checker.cjs");
}

#[test]
fn test_lines_script_dynamic() {
    let e = entry("app/index.js", ModuleStyle::Script);
    let lines = InjectionLines::new(&e, Path::new("app/env_checker.js"), None);
    insta::assert_snapshot!(lines.loader, @"require('dotenv').config();");
    insta::assert_snapshot!(
        lines.guard,
        @"const { checkEnvAndThrowError } = require('./env_checker'); checkEnvAndThrowError(); // env-checker:inject"
    );
}

#[test]
fn test_lines_module_style() {
    let e = entry("app/index.js", ModuleStyle::Module);
    let lines = InjectionLines::new(&e, Path::new("app/env_checker.js"), None);
    assert_eq!(lines.loader, "import 'dotenv/config';");
    assert_eq!(
        lines.guard,
        "import { checkEnvAndThrowError } from './env_checker.js'; checkEnvAndThrowError(); // env-checker:inject"
    );
}

#[test]
fn test_lines_script_typed() {
    let e = entry("app/index.ts", ModuleStyle::Script);
    let lines = InjectionLines::new(&e, Path::new("app/env_checker.ts"), None);
    assert_eq!(lines.loader, "import 'dotenv/config';");
    assert_eq!(
        lines.guard,
        "import { checkEnvAndThrowError } from './env_checker'; checkEnvAndThrowError(); // env-checker:inject"
    );
}

#[test]
fn test_extension_overrides_project_style() {
    let e = entry("app/server.cjs", ModuleStyle::Module);
    assert_eq!(e.module_style(), ModuleStyle::Script);
    let lines = InjectionLines::new(&e, Path::new("app/env_checker.js"), None);
    assert_eq!(lines.loader, "require('dotenv').config();");
    assert_eq!(
        lines.guard,
        "const { checkEnvAndThrowError } = require('./env_checker'); checkEnvAndThrowError(); // env-checker:inject"
    );

    let e = entry("app/server.mts", ModuleStyle::Script);
    assert_eq!(e.module_style(), ModuleStyle::Module);
    let lines = InjectionLines::new(&e, Path::new("app/env_checker.ts"), None);
    assert_eq!(
        lines.guard,
        "import { checkEnvAndThrowError } from './env_checker.js'; checkEnvAndThrowError(); // env-checker:inject"
    );
}

#[test]
fn test_lines_custom_declaration_path() {
    let script = entry("app/index.js", ModuleStyle::Script);
    let lines = InjectionLines::new(&script, Path::new("app/env_checker.js"), Some("config/app.env"));
    assert_eq!(lines.loader, "require('dotenv').config({ path: 'config/app.env' });");

    let module = entry("app/index.js", ModuleStyle::Module);
    let lines = InjectionLines::new(&module, Path::new("app/env_checker.js"), Some("it's.env"));
    assert_eq!(
        lines.loader,
        r"import { config } from 'dotenv'; config({ path: 'it\'s.env' });"
    );
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

fn script_lines() -> InjectionLines {
    InjectionLines::new(
        &entry("app/index.js", ModuleStyle::Script),
        Path::new("app/env_checker.js"),
        None,
    )
}

#[test]
fn test_inject_source_prepends_lines() {
    let out = inject_source("console.log('x')", &script_lines()).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "require('dotenv').config();");
    assert!(lines[1].ends_with(INJECT_MARKER));
    assert_eq!(lines[2], "console.log('x')");
    assert!(out.ends_with("console.log('x')"));
}

#[test]
fn test_inject_source_keeps_shebang_first() {
    let original = "#!/usr/bin/env node\nmain();\n";
    let out = inject_source(original, &script_lines()).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "#!/usr/bin/env node");
    assert_eq!(lines[1], "require('dotenv').config();");
    assert_eq!(lines[3], "main();");
}

#[test]
fn test_inject_source_shebang_without_newline() {
    let out = inject_source("#!/usr/bin/env node", &script_lines()).unwrap();
    assert!(out.starts_with("#!/usr/bin/env node\nrequire('dotenv')"));
}

#[test]
fn test_inject_source_empty_file() {
    let out = inject_source("", &script_lines()).unwrap();
    assert_eq!(out.lines().count(), 2);
    assert!(out.ends_with('\n'));
}

#[test]
fn test_inject_source_already_marked() {
    let once = inject_source("main();\n", &script_lines()).unwrap();
    assert_eq!(inject_source(&once, &script_lines()), None);
}

#[test]
fn test_inject_entry_is_idempotent() {
    let (_temp, paths) = project();
    let path = paths.root.join("index.js");
    std::fs::write(&path, "console.log('x');\n").unwrap();
    let e = EntryDescriptor::new(path.clone(), ModuleStyle::Script);
    let lines = InjectionLines::new(&e, &paths.output, None);

    assert_eq!(inject_entry(&e, &lines).unwrap(), InjectOutcome::Injected);
    let first = std::fs::read_to_string(&path).unwrap();
    assert_eq!(inject_entry(&e, &lines).unwrap(), InjectOutcome::AlreadyInjected);
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.matches(INJECT_MARKER).count(), 1);
    assert!(first.ends_with("console.log('x');\n"));
}

#[test]
fn test_inject_entry_missing_file() {
    let e = entry("/nonexistent/env-checker/index.js", ModuleStyle::Script);
    let err = inject_entry(&e, &script_lines()).unwrap_err();
    assert!(matches!(err, EnvCheckerError::MissingFile { .. }));
}

#[test]
fn test_inject_entry_keeps_bom() {
    let (_temp, paths) = project();
    let path = paths.root.join("index.js");
    std::fs::write(&path, "\u{feff}console.log('café');\n").unwrap();
    let e = EntryDescriptor::new(path.clone(), ModuleStyle::Script);
    let lines = InjectionLines::new(&e, &paths.output, None);

    assert_eq!(inject_entry(&e, &lines).unwrap(), InjectOutcome::Injected);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("\u{feff}require('dotenv').config();\n"));
    assert!(written.ends_with("console.log('café');\n"));
}

#[test]
fn test_inject_entry_refuses_invalid_text() {
    let (_temp, paths) = project();
    let path = paths.root.join("index.js");
    let original: &[u8] = b"console.log('caf\xe9');\n";
    std::fs::write(&path, original).unwrap();
    let e = EntryDescriptor::new(path.clone(), ModuleStyle::Script);
    let lines = InjectionLines::new(&e, &paths.output, None);

    let err = inject_entry(&e, &lines).unwrap_err();

    assert!(matches!(err, EnvCheckerError::Undecodable { encoding: "UTF-8", .. }));
    assert_eq!(std::fs::read(&path).unwrap(), original);
}
