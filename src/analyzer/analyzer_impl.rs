use std::path::{Path, PathBuf};

use console::style;
use indicatif::{ParallelProgressIterator, ProgressBar};
use miette::{Result, WrapErr};
use rayon::prelude::*;

use super::extractor::{ExtractedImports, ImportExtractor};
use super::registry::{ModuleId, ModuleRegistry, SourceModule};
use super::resolver::candidate_targets;
use crate::config::IgnorePatterns;
use crate::core::{DiscoveryError, ImportStatement, ParseError, ResolutionWarning};
use crate::discovery::{FileDiscoverer, resolve_root};
use crate::error::CircularImportError;
use crate::progress::ProgressReporter;

/// Discovers a project's modules and extracts their imports
///
/// Extraction runs on a bounded rayon pool, one parser per worker. Each
/// worker yields an independent per-module outcome; the outcomes are merged
/// afterwards on the calling thread.
#[derive(Debug, Clone, Default)]
pub struct ImportAnalyzer {
    root: PathBuf,
    registry: ModuleRegistry,
    imports: Vec<Option<ExtractedImports>>,
    parse_errors: Vec<ParseError>,
    discovery_errors: Vec<DiscoveryError>,
    resolution_warnings: Vec<ResolutionWarning>,
}

impl ImportAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyse every source file under `root`
    ///
    /// Fails only when the root itself is unusable or the parser cannot be
    /// set up; per-file problems are recorded and the run continues.
    pub fn analyze_project(
        &mut self,
        root: &Path,
        ignore: &IgnorePatterns,
        jobs: Option<usize>,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<()> {
        *self = Self::new();
        self.root = resolve_root(root)?;

        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }
        let discovered =
            FileDiscoverer::new(&self.root, ignore).discover(progress.as_deref());

        let (registry, duplicates) = ModuleRegistry::from_files(&self.root, &discovered.files);
        self.registry = registry;
        self.discovery_errors = discovered.errors;
        self.discovery_errors.extend(duplicates);

        if let Some(p) = progress.as_mut() {
            p.finish_discovery(self.registry.len());
        }

        ImportExtractor::new().wrap_err("Failed to set up the Python parser")?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs.unwrap_or(0))
            .build()
            .map_err(CircularImportError::from)
            .wrap_err("Failed to start the parser worker pool")?;

        let bar = match progress.as_mut() {
            Some(p) => p.start_parsing(self.registry.len()),
            None => ProgressBar::hidden(),
        };

        let registry = &self.registry;
        let modules: Vec<(ModuleId, &SourceModule)> = registry.iter().collect();
        let outcomes: Vec<(ModuleId, Result<ExtractedImports, ParseError>)> = pool.install(|| {
            modules
                .into_par_iter()
                .progress_with(bar)
                .map_init(ImportExtractor::new, |extractor, (id, module)| {
                    let outcome = match extractor {
                        Ok(extractor) => extract_module(extractor, module),
                        Err(err) => Err(parse_error(module, err.to_string())),
                    };
                    (id, outcome)
                })
                .collect()
        });

        self.imports = vec![None; self.registry.len()];
        for (id, outcome) in outcomes {
            match outcome {
                Ok(extracted) => {
                    self.resolution_warnings
                        .extend(extracted.warnings.iter().cloned());
                    self.imports[id.index()] = Some(extracted);
                }
                Err(error) => {
                    eprintln!(
                        "{} Could not parse {}: {}",
                        style("⚠").yellow(),
                        style(error.path.display()).dim(),
                        error.message
                    );
                    self.parse_errors.push(error);
                }
            }
        }

        self.warn_unresolved_relative_imports();

        if let Some(p) = progress.as_mut() {
            p.finish_parsing(self.parse_errors.len());
        }

        Ok(())
    }

    /// Record relative imports none of whose candidates is a project module
    fn warn_unresolved_relative_imports(&mut self) {
        let mut warnings = Vec::new();
        for (id, module) in self.registry.iter() {
            let Some(imports) = self.imports_of(id) else {
                continue;
            };

            for statement in &imports.statements {
                if !matches!(statement, ImportStatement::Relative { .. }) {
                    continue;
                }
                let Ok(targets) = candidate_targets(statement, module) else {
                    continue;
                };
                if !targets.iter().any(|t| self.registry.contains(t)) {
                    warnings.push(ResolutionWarning {
                        module: module.name().to_string(),
                        statement: statement.to_string(),
                        message: "relative import does not resolve to a module in the project"
                            .to_string(),
                    });
                }
            }
        }
        self.resolution_warnings.extend(warnings);
    }

    /// The canonical project root of the last analysis
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Imports of a module, `None` when it failed to parse
    pub fn imports_of(&self, id: ModuleId) -> Option<&ExtractedImports> {
        self.imports.get(id.index()).and_then(Option::as_ref)
    }

    pub fn is_parsed(&self, id: ModuleId) -> bool {
        self.imports_of(id).is_some()
    }

    pub fn parsed_count(&self) -> usize {
        self.imports.iter().filter(|i| i.is_some()).count()
    }

    pub fn parse_errors(&self) -> &[ParseError] {
        &self.parse_errors
    }

    pub fn discovery_errors(&self) -> &[DiscoveryError] {
        &self.discovery_errors
    }

    pub fn resolution_warnings(&self) -> &[ResolutionWarning] {
        &self.resolution_warnings
    }
}

fn extract_module(
    extractor: &mut ImportExtractor,
    module: &SourceModule,
) -> Result<ExtractedImports, ParseError> {
    let bytes = std::fs::read(module.path())
        .map_err(|err| parse_error(module, format!("failed to read file: {err}")))?;
    let source = String::from_utf8(bytes)
        .map_err(|_| parse_error(module, "file is not valid UTF-8".to_string()))?;
    let source = source.strip_prefix('\u{feff}').unwrap_or(&source);

    extractor
        .extract(source, module)
        .map_err(|err| parse_error(module, err.to_string()))
}

fn parse_error(module: &SourceModule, message: String) -> ParseError {
    ParseError {
        path: module.path().to_path_buf(),
        module: module.name().to_string(),
        message,
    }
}
