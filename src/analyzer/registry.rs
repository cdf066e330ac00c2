use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::discovery::PACKAGE_INIT_STEM;
use crate::core::DiscoveryError;

/// Dense integer identity of a registered module
///
/// Ids follow the lexicographic order of module names, so comparing ids
/// compares names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(u32);

impl ModuleId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A discovered source file and its logical module path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    name: String,
    path: PathBuf,
    is_package: bool,
}

impl SourceModule {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, is_package: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_package,
        }
    }

    /// Dotted module path, e.g. `pkg.sub.mod`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True for a package's `__init__.py`
    pub fn is_package(&self) -> bool {
        self.is_package
    }
}

/// Derive the dotted module path of `file` relative to `root`
///
/// `pkg/__init__.py` maps to `pkg` and is flagged as a package. Returns
/// `None` for files outside the root and for the root's own `__init__.py`.
pub fn module_name_for(file: &Path, root: &Path) -> Option<(String, bool)> {
    let relative = file.strip_prefix(root).ok()?;
    let mut parts: Vec<String> = relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    let is_package = parts.last().is_some_and(|last| last == PACKAGE_INIT_STEM);
    if is_package {
        parts.pop();
    }

    if parts.is_empty() {
        None
    } else {
        Some((parts.join("."), is_package))
    }
}

/// Two-way mapping between module names and dense ids
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: Vec<SourceModule>,
    ids: HashMap<String, ModuleId>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every file under `root`
    ///
    /// When two files map to the same module name the first one in `files`
    /// wins and the other is returned as a discovery error.
    pub fn from_files(root: &Path, files: &[PathBuf]) -> (Self, Vec<DiscoveryError>) {
        let mut errors = Vec::new();
        let mut by_name: HashMap<String, SourceModule> = HashMap::new();

        for file in files {
            let Some((name, is_package)) = module_name_for(file, root) else {
                continue;
            };

            if let Some(existing) = by_name.get(&name) {
                errors.push(DiscoveryError {
                    path: Some(file.clone()),
                    message: format!(
                        "module '{name}' is already provided by '{}'",
                        existing.path().display()
                    ),
                });
                continue;
            }

            by_name.insert(name.clone(), SourceModule::new(name, file, is_package));
        }

        let mut modules: Vec<SourceModule> = by_name.into_values().collect();
        modules.sort_by(|a, b| a.name.cmp(&b.name));

        (Self::from_sorted(modules), errors)
    }

    fn from_sorted(modules: Vec<SourceModule>) -> Self {
        let ids = modules
            .iter()
            .enumerate()
            .map(|(index, module)| (module.name.clone(), ModuleId::new(index)))
            .collect();

        Self { modules, ids }
    }

    pub fn id_of(&self, name: &str) -> Option<ModuleId> {
        self.ids.get(name).copied()
    }

    pub fn get(&self, id: ModuleId) -> &SourceModule {
        &self.modules[id.index()]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &SourceModule)> {
        self.modules
            .iter()
            .enumerate()
            .map(|(index, module)| (ModuleId::new(index), module))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_module_name_for_plain_file() {
        let root = Path::new("/project");

        assert_eq!(
            module_name_for(Path::new("/project/app/models.py"), root),
            Some(("app.models".to_string(), false))
        );
        assert_eq!(
            module_name_for(Path::new("/project/main.py"), root),
            Some(("main".to_string(), false))
        );
    }

    #[test]
    fn test_module_name_for_package_init() {
        let root = Path::new("/project");

        assert_eq!(
            module_name_for(Path::new("/project/app/__init__.py"), root),
            Some(("app".to_string(), true))
        );
        assert_eq!(module_name_for(Path::new("/project/__init__.py"), root), None);
        assert_eq!(module_name_for(Path::new("/elsewhere/x.py"), root), None);
    }

    #[test]
    fn test_ids_follow_name_order() {
        let root = Path::new("/p");
        let files = vec![
            PathBuf::from("/p/zeta.py"),
            PathBuf::from("/p/alpha.py"),
            PathBuf::from("/p/mid/__init__.py"),
        ];

        let (registry, errors) = ModuleRegistry::from_files(root, &files);

        assert!(errors.is_empty());
        let names: Vec<&str> = registry.iter().map(|(_, m)| m.name()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
        assert_eq!(registry.id_of("mid"), Some(ModuleId::new(1)));
        assert!(registry.get(ModuleId::new(1)).is_package());
    }

    #[test]
    fn test_duplicate_module_names_keep_first() {
        let root = Path::new("/p");
        let files = vec![
            PathBuf::from("/p/pkg/__init__.py"),
            PathBuf::from("/p/pkg.py"),
        ];

        let (registry, errors) = ModuleRegistry::from_files(root, &files);

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(ModuleId::new(0)).path(),
            Path::new("/p/pkg/__init__.py")
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.as_deref(), Some(Path::new("/p/pkg.py")));
    }
}
