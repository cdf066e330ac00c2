//! Turning parsed import statements into candidate module names

use std::collections::BTreeSet;

use thiserror::Error;

use super::registry::SourceModule;
use crate::core::ImportStatement;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("relative import of level {level} climbs above the project root")]
    AboveRoot { level: usize },
}

/// Resolve a relative reference against the importing module
///
/// The anchor is the importer's own package: the module itself when it is a
/// package `__init__`, its parent otherwise. A level of `n` climbs `n - 1`
/// packages above the anchor before `suffix` is appended. The result is
/// empty when the anchor is the project root and there is no suffix.
pub fn resolve_relative(
    importer: &str,
    is_package: bool,
    level: usize,
    suffix: Option<&str>,
) -> Result<String, ResolutionError> {
    let mut package: Vec<&str> = importer.split('.').filter(|p| !p.is_empty()).collect();
    if !is_package {
        package.pop();
    }

    let climb = level.saturating_sub(1);
    if climb > package.len() {
        return Err(ResolutionError::AboveRoot { level });
    }
    package.truncate(package.len() - climb);

    if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
        package.push(suffix);
    }

    Ok(package.join("."))
}

/// Every module name a statement may pull in
///
/// `from pkg import name` can import the submodule `pkg.name`, so each
/// imported name contributes a candidate alongside the module itself. Names
/// that turn out not to be modules are dropped later by the graph builder.
pub fn candidate_targets(
    statement: &ImportStatement,
    importer: &SourceModule,
) -> Result<BTreeSet<String>, ResolutionError> {
    let mut targets = BTreeSet::new();

    match statement {
        ImportStatement::Absolute { module, names } => {
            targets.insert(module.clone());
            for name in imported(names) {
                targets.insert(format!("{module}.{name}"));
            }
        }
        ImportStatement::Relative {
            level,
            suffix,
            names,
        } => {
            let base = resolve_relative(
                importer.name(),
                importer.is_package(),
                *level,
                suffix.as_deref(),
            )?;

            // `from . import x` inside a package's __init__ names the package
            // itself; that is not a self-import.
            if !base.is_empty() && (suffix.is_some() || base != importer.name()) {
                targets.insert(base.clone());
            }

            for name in imported(names) {
                if base.is_empty() {
                    targets.insert(name.clone());
                } else {
                    targets.insert(format!("{base}.{name}"));
                }
            }
        }
    }

    Ok(targets)
}

/// Names that may be submodules; `*` names none
fn imported(names: &[String]) -> impl Iterator<Item = &String> {
    names
        .iter()
        .filter(|name| name.as_str() != ImportStatement::WILDCARD)
}
