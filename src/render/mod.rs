// env-checker-rs: .env guard module generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generated module rendering.
//!
//! ```text
//! RenderedModule { dialect, module_style, names, guard }
//!        |
//!        v  template(dialect, style)
//!  header
//!  ENV_LIST  = ['A', 'B']
//!  ENVS type   (JSDoc @typedef | interface)
//!  ENVS record (process.env.A [as string])
//!  checkEnvAndThrowError   first missing name --> console.error + throw
//!  exports     (module.exports | export {} | inline export)
//! ```
//!
//! One renderer for both dialects; the per-flavor differences live in the
//! [`Template`] table below. Output is deterministic for a given input.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::OnceLock;

use bon::Builder;
use regex::Regex;
use tracing::info;

use crate::config::types::{Dialect, ModuleStyle};
use crate::declaration::DeclarationSet;
use crate::error::EnvCheckerResult;
use crate::utility::fs::write_atomic;

/// Name of the guard function exported by the generated module.
pub const GUARD_FUNCTION: &str = "checkEnvAndThrowError";

const HEADER: &str = "\
// Auto-generated by env-checker
// Do not modify manually
";

const GUARD_BODY: &str = "\
/**
 * Throws an error if any required environment variable is missing.
 */
%SIGNATURE% {
  for (const env of ENV_LIST) {
    if (!process.env[env]) {
      const message =
        `[ENV ERROR] Missing required environment variable: ${env}\\n` +
        `Make sure '${env}' is defined in your %DECLARATION_FILE% file.\\n` +
        `Location: ${%LOCATION%}`;

      console.error(message);
      throw new Error(message);
    }
  }
};
";

/// Dialect and module-style specific fragments.
#[derive(Debug)]
struct Template {
    list_decl: &'static str,
    typed_shape: bool,
    envs_decl: &'static str,
    read_suffix: &'static str,
    guard_signature: &'static str,
    location: &'static str,
    exports: Option<&'static str>,
}

const DYNAMIC_SCRIPT: Template = Template {
    list_decl: "const ENV_LIST =",
    typed_shape: false,
    envs_decl: "/** @type {ENVS} */\nconst ENVS =",
    read_suffix: "",
    guard_signature: "const checkEnvAndThrowError = () =>",
    location: "__filename",
    exports: Some("module.exports = { checkEnvAndThrowError, ENVS, ENV_LIST };"),
};

const DYNAMIC_MODULE: Template = Template {
    location: "import.meta.url",
    exports: Some("export { checkEnvAndThrowError, ENVS, ENV_LIST };"),
    ..DYNAMIC_SCRIPT
};

const TYPED_SCRIPT: Template = Template {
    list_decl: "export const ENV_LIST: string[] =",
    typed_shape: true,
    envs_decl: "export const ENVS: ENVS =",
    read_suffix: " as string",
    guard_signature: "export const checkEnvAndThrowError = (): void =>",
    location: "__filename",
    exports: None,
};

const TYPED_MODULE: Template = Template {
    location: "import.meta.url || 'env_checker.ts'",
    ..TYPED_SCRIPT
};

const fn template(dialect: Dialect, style: ModuleStyle) -> &'static Template {
    match (dialect, style) {
        (Dialect::Dynamic, ModuleStyle::Script) => &DYNAMIC_SCRIPT,
        (Dialect::Dynamic, ModuleStyle::Module) => &DYNAMIC_MODULE,
        (Dialect::Typed, ModuleStyle::Script) => &TYPED_SCRIPT,
        (Dialect::Typed, ModuleStyle::Module) => &TYPED_MODULE,
    }
}

/// A generated module ready to be serialized.
///
/// The guard iterates exactly the embedded `names`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModule {
    dialect: Dialect,
    module_style: ModuleStyle,
    names: Vec<String>,
    guard: String,
}

/// Flavor of a generated module.
#[derive(Debug, Clone, Builder)]
pub struct RenderOptions {
    dialect: Dialect,
    #[builder(default)]
    module_style: ModuleStyle,
    /// Declaration file name shown in the guard's error message.
    #[builder(default = ".env".to_string(), into)]
    declaration_file: String,
}

impl RenderedModule {
    /// Builds a module for `names` (already filtered).
    #[must_use]
    pub fn new(names: &DeclarationSet, options: &RenderOptions) -> Self {
        let template = template(options.dialect, options.module_style);
        let guard = GUARD_BODY
            .replace("%SIGNATURE%", template.guard_signature)
            .replace(
                "%DECLARATION_FILE%",
                &escape_template_literal(&options.declaration_file),
            )
            .replace("%LOCATION%", template.location);

        Self {
            dialect: options.dialect,
            module_style: options.module_style,
            names: names.names().to_vec(),
            guard,
        }
    }

    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[must_use]
    pub const fn module_style(&self) -> ModuleStyle {
        self.module_style
    }

    /// Names embedded in `ENV_LIST`.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Source text of the guard function.
    #[must_use]
    pub fn guard_source(&self) -> &str {
        &self.guard
    }

    /// Serializes the module to source text.
    #[must_use]
    pub fn to_source(&self) -> String {
        let template = template(self.dialect, self.module_style);
        let mut out = String::with_capacity(1024 + self.names.len() * 96);

        out.push_str(HEADER);
        out.push('\n');

        out.push_str(
            "/**\n * Required environment variables, in declaration order.\n \
             * Run `env-checker` again after adding or removing variables.\n */\n",
        );
        let items: Vec<String> = self
            .names
            .iter()
            .map(|name| format!("'{}'", escape_single_quoted(name)))
            .collect();
        let _ = writeln!(out, "{} {};", template.list_decl, block('[', &items, ']'));
        out.push('\n');

        if template.typed_shape {
            self.push_interface(&mut out);
        } else {
            self.push_typedef(&mut out);
        }
        out.push('\n');

        let fields: Vec<String> = self
            .names
            .iter()
            .map(|name| {
                format!(
                    "{}: {}{}",
                    property_key(name),
                    env_read(name),
                    template.read_suffix
                )
            })
            .collect();
        let _ = writeln!(out, "{} {};", template.envs_decl, block('{', &fields, '}'));
        out.push('\n');

        out.push_str(&self.guard);

        if let Some(exports) = template.exports {
            out.push('\n');
            out.push_str(exports);
            out.push('\n');
        }

        out
    }

    fn push_typedef(&self, out: &mut String) {
        out.push_str("/**\n * Access all environment variables with autocomplete support.\n");
        out.push_str(" * @typedef {Object} ENVS\n");
        for name in &self.names {
            let _ = writeln!(out, " * @property {{string}} {name}");
        }
        out.push_str(" */\n");
    }

    fn push_interface(&self, out: &mut String) {
        out.push_str("/**\n * Access all environment variables with autocomplete and type safety.\n */\n");
        let fields: Vec<String> = self
            .names
            .iter()
            .map(|name| format!("{}: string", property_key(name)))
            .collect();
        if fields.is_empty() {
            out.push_str("export interface ENVS {}\n");
        } else {
            out.push_str("export interface ENVS {\n");
            for field in fields {
                let _ = writeln!(out, "  {field};");
            }
            out.push_str("}\n");
        }
    }

    /// Writes the module to `path`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EnvCheckerError::Write`] if the destination
    /// cannot be written.
    pub fn write_to(&self, path: &Path) -> EnvCheckerResult<()> {
        write_atomic(path, &self.to_source())?;
        info!(
            path = %path.display(),
            dialect = %self.dialect,
            variables = self.names.len(),
            "generated env checker module"
        );
        Ok(())
    }
}

/// `[\n  a,\n  b\n]`, or `[]` when empty.
fn block(open: char, items: &[String], close: char) -> String {
    if items.is_empty() {
        return format!("{open}{close}");
    }
    format!("{open}\n  {}\n{close}", items.join(",\n  "))
}

/// Pre-validated JavaScript identifier pattern.
/// Falls back to quoting every key if it cannot be compiled.
fn identifier_regex() -> Option<&'static Regex> {
    static IDENTIFIER: OnceLock<Option<Regex>> = OnceLock::new();
    IDENTIFIER
        .get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").ok())
        .as_ref()
}

fn is_identifier(name: &str) -> bool {
    identifier_regex().is_some_and(|re| re.is_match(name))
}

fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", escape_single_quoted(name))
    }
}

fn env_read(name: &str) -> String {
    if is_identifier(name) {
        format!("process.env.{name}")
    } else {
        format!("process.env['{}']", escape_single_quoted(name))
    }
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn escape_template_literal(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
