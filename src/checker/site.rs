//! Index of what a Python environment can import
//!
//! The index is built by scanning the directories of the interpreter's
//! `sys.path` once. It records:
//! - top-level packages (`name/`) and modules (`name.py`, `name.pyc`)
//! - extension modules (`name.cpython-312-x86_64-linux-gnu.so`, `name.pyd`)
//! - installed distributions (`*.dist-info`, `*.egg-info`) with their
//!   version and `top_level.txt`
//! - builtin module names reported by the interpreter
//!
//! Lookups are keyed by lowercase name.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension module suffixes
const EXTENSION_SUFFIXES: &[&str] = &[".so", ".pyd", ".dylib"];

/// Files inside a package that commonly hold its version
const PACKAGE_VERSION_FILES: &[&str] =
    &["__init__.py", "_version.py", "version.py", "__about__.py"];

/// Where a top-level importable name lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleLocation {
    /// A package directory (regular or namespace)
    Package(PathBuf),
    /// A single-file source or bytecode module
    Module(PathBuf),
    /// A compiled extension module
    Extension(PathBuf),
}

impl ModuleLocation {
    /// Source files that may assign a version, most conventional first
    pub fn version_files(&self) -> Vec<PathBuf> {
        match self {
            ModuleLocation::Package(dir) => PACKAGE_VERSION_FILES
                .iter()
                .map(|f| dir.join(f))
                .filter(|p| p.is_file())
                .collect(),
            ModuleLocation::Module(file) if file.extension().is_some_and(|e| e == "py") => {
                vec![file.clone()]
            }
            ModuleLocation::Module(_) | ModuleLocation::Extension(_) => Vec::new(),
        }
    }
}

/// An installed distribution found through its metadata directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    /// Project name from the `Name:` header
    pub name: String,
    /// Version from the `Version:` header
    pub version: String,
    /// Import names listed in `top_level.txt`
    pub top_level: Vec<String>,
}

/// Cached listing of importable names and installed distributions
#[derive(Debug, Clone, Default)]
pub struct SiteIndex {
    modules: BTreeMap<String, ModuleLocation>,
    builtins: BTreeSet<String>,
    distributions: Vec<Distribution>,
    scanned_dirs: Vec<PathBuf>,
}

impl SiteIndex {
    /// An index that knows nothing; every lookup fails
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scan `dirs` in order; earlier directories win on name clashes
    pub fn scan<P: AsRef<Path>>(dirs: &[P], builtins: &[String]) -> Self {
        let mut index = Self {
            builtins: builtins.iter().map(|b| b.to_lowercase()).collect(),
            ..Self::default()
        };

        for dir in dirs {
            let dir = dir.as_ref();
            match fs::read_dir(dir) {
                Ok(entries) => {
                    for entry in entries.flatten() {
                        index.record_entry(&entry.path());
                    }
                    index.scanned_dirs.push(dir.to_path_buf());
                }
                Err(e) => tracing::debug!("skipping {}: {}", dir.display(), e),
            }
        }

        tracing::debug!(
            "indexed {} module(s), {} distribution(s), {} builtin(s)",
            index.modules.len(),
            index.distributions.len(),
            index.builtins.len()
        );
        index
    }

    fn record_entry(&mut self, path: &Path) {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return;
        };

        if path.is_dir() {
            if let Some(stem) = file_name
                .strip_suffix(".dist-info")
                .or_else(|| file_name.strip_suffix(".egg-info"))
            {
                if let Some(dist) = read_distribution(path, stem) {
                    self.distributions.push(dist);
                }
                return;
            }
            if is_identifier(file_name) && file_name != "__pycache__" {
                self.insert_module(file_name, ModuleLocation::Package(path.to_path_buf()));
            }
            return;
        }

        if let Some(stem) = file_name.strip_suffix(".py").or_else(|| file_name.strip_suffix(".pyc")) {
            if is_identifier(stem) {
                self.insert_module(stem, ModuleLocation::Module(path.to_path_buf()));
            }
            return;
        }

        for suffix in EXTENSION_SUFFIXES {
            if let Some(rest) = file_name.strip_suffix(suffix) {
                // `_ssl.cpython-312-x86_64-linux-gnu.so` → `_ssl`
                let stem = rest.split('.').next().unwrap_or(rest);
                if is_identifier(stem) {
                    self.insert_module(stem, ModuleLocation::Extension(path.to_path_buf()));
                }
                return;
            }
        }

        // Legacy egg-info as a single PKG-INFO file
        if let Some(stem) = file_name.strip_suffix(".egg-info") {
            if let Some(dist) = read_metadata_file(path, stem) {
                self.distributions.push(dist);
            }
        }
    }

    fn insert_module(&mut self, name: &str, location: ModuleLocation) {
        self.modules.entry(name.to_lowercase()).or_insert(location);
    }

    /// Whether `import_name` resolves to a module, a builtin or a distribution
    pub fn can_load(&self, import_name: &str) -> bool {
        let key = import_name.to_lowercase();
        let top = key.split('.').next().unwrap_or(&key);
        self.modules.contains_key(top)
            || self.builtins.contains(top)
            || self.distribution_for(import_name).is_some()
    }

    /// Location of a top-level importable name
    pub fn locate(&self, import_name: &str) -> Option<&ModuleLocation> {
        let key = import_name.to_lowercase();
        let top = key.split('.').next().unwrap_or(&key);
        self.modules.get(top)
    }

    /// Distribution whose project name or top-level modules match `name`
    pub fn distribution_for(&self, name: &str) -> Option<&Distribution> {
        let wanted = normalize_project_name(name);
        self.distributions
            .iter()
            .find(|d| normalize_project_name(&d.name) == wanted)
            .or_else(|| {
                let import_key = name.to_lowercase().replace('-', "_");
                self.distributions.iter().find(|d| {
                    d.top_level
                        .iter()
                        .any(|t| t.to_lowercase() == import_key)
                })
            })
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn distribution_count(&self) -> usize {
        self.distributions.len()
    }

    pub fn builtin_count(&self) -> usize {
        self.builtins.len()
    }

    pub fn scanned_dirs(&self) -> &[PathBuf] {
        &self.scanned_dirs
    }
}

/// PEP 503 normalization: lowercase, runs of `-`, `_`, `.` become `-`
pub fn normalize_project_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for c in name.trim().chars() {
        if matches!(c, '-' | '_' | '.') {
            if !last_was_sep {
                out.push('-');
            }
            last_was_sep = true;
        } else {
            out.extend(c.to_lowercase());
            last_was_sep = false;
        }
    }
    out
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn read_distribution(dir: &Path, stem: &str) -> Option<Distribution> {
    let metadata = ["METADATA", "PKG-INFO"]
        .iter()
        .map(|f| dir.join(f))
        .find(|p| p.is_file())?;
    let mut dist = read_metadata_file(&metadata, stem)?;

    if let Ok(top_level) = fs::read_to_string(dir.join("top_level.txt")) {
        dist.top_level = top_level
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
    }
    Some(dist)
}

/// Parse `Name:` and `Version:` from an RFC 822 style metadata file.
///
/// Falls back to the `name-version` directory stem when headers are absent.
fn read_metadata_file(path: &Path, stem: &str) -> Option<Distribution> {
    let content = fs::read_to_string(path).ok()?;
    let mut name = None;
    let mut version = None;

    for line in content.lines() {
        // Headers end at the first blank line
        if line.is_empty() {
            break;
        }
        if let Some(v) = line.strip_prefix("Name:") {
            name.get_or_insert_with(|| v.trim().to_string());
        } else if let Some(v) = line.strip_prefix("Version:") {
            version.get_or_insert_with(|| v.trim().to_string());
        }
    }

    let (stem_name, stem_version) = match stem.split_once('-') {
        Some((n, v)) => (n.to_string(), Some(v.to_string())),
        None => (stem.to_string(), None),
    };

    Some(Distribution {
        name: name.unwrap_or(stem_name),
        version: version.or(stem_version)?,
        top_level: Vec::new(),
    })
}
