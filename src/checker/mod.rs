//! Importability checks against a Python environment
//!
//! This module provides:
//! - Name normalization from package name to import name
//! - Importability and version lookups through a [`ModuleResolver`]
//! - Install command formatting per platform
//! - Building the resolver for the local interpreter

mod interpreter;
mod site;
mod version;

pub use interpreter::{
    default_python, probe, InterpreterRunner, ProbeOutput, PythonEnvironment, SystemInterpreter,
    MIN_PYTHON,
};
pub use site::{normalize_project_name, Distribution, ModuleLocation, SiteIndex};
pub use version::scan_source;

use crate::domain::{CheckEntry, CheckReport, Platform, VERSION_UNAVAILABLE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Source of answers about what an environment can import
pub trait ModuleResolver {
    /// Whether `import_name` would import successfully
    fn can_load(&self, import_name: &str) -> bool;

    /// Source text that may define the module's version, most specific first
    fn module_sources(&self, import_name: &str) -> Vec<String>;

    /// Version from installed-distribution metadata
    fn distribution_version(&self, name: &str) -> Option<String>;
}

/// Package name to import name: lowercase, `-` → `_`
pub fn normalize_import_name(name: &str) -> String {
    name.trim().to_lowercase().replace('-', "_")
}

/// Install command for `name` on `platform`
pub fn install_command(name: &str, platform: Platform) -> String {
    format!("{} {}", platform.pip_prefix(), name)
}

/// Answers importability and version questions
#[derive(Debug)]
pub struct Checker<R> {
    resolver: R,
}

impl<R: ModuleResolver> Checker<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Whether one package can be imported
    pub fn is_importable(&self, name: &str) -> bool {
        let import_name = normalize_import_name(name);
        let loadable = !import_name.is_empty() && self.resolver.can_load(&import_name);
        tracing::debug!("{} -> {} importable={}", name, import_name, loadable);
        loadable
    }

    /// Importability of each name, keyed by the name as given
    pub fn check_importable<S: AsRef<str>>(&self, names: &[S]) -> BTreeMap<String, bool> {
        names
            .iter()
            .map(|n| (n.as_ref().to_string(), self.is_importable(n.as_ref())))
            .collect()
    }

    /// Detected version of an importable package, else `"N/A"`
    pub fn get_version(&self, name: &str) -> String {
        if !self.is_importable(name) {
            return VERSION_UNAVAILABLE.to_string();
        }

        let import_name = normalize_import_name(name);
        self.resolver
            .module_sources(&import_name)
            .iter()
            .find_map(|source| scan_source(source))
            .or_else(|| self.resolver.distribution_version(name))
            .or_else(|| self.resolver.distribution_version(&import_name))
            .unwrap_or_else(|| VERSION_UNAVAILABLE.to_string())
    }

    /// Importability plus version for each name
    pub fn check<S: AsRef<str>>(&self, names: &[S]) -> CheckReport {
        let mut report = CheckReport::new();
        for name in names {
            let name = name.as_ref();
            let entry = if self.is_importable(name) {
                CheckEntry {
                    importable: true,
                    version: self.get_version(name),
                }
            } else {
                CheckEntry::missing()
            };
            report.insert(name, entry);
        }
        report
    }
}

impl ModuleResolver for SiteIndex {
    fn can_load(&self, import_name: &str) -> bool {
        SiteIndex::can_load(self, import_name)
    }

    fn module_sources(&self, import_name: &str) -> Vec<String> {
        self.locate(import_name)
            .map(|location| location.version_files())
            .unwrap_or_default()
            .iter()
            .filter_map(|path| std::fs::read_to_string(path).ok())
            .collect()
    }

    fn distribution_version(&self, name: &str) -> Option<String> {
        self.distribution_for(name).map(|d| d.version.clone())
    }
}

/// Where the site index comes from
#[derive(Debug, Clone, Default)]
pub struct EnvironmentOptions {
    /// Interpreter command; the platform default when `None`
    pub python: Option<String>,
    /// Explicit directories; skips the interpreter when non-empty
    pub site_dirs: Vec<PathBuf>,
}

/// Site index plus what is known about the interpreter behind it
#[derive(Debug)]
pub struct Environment {
    pub index: SiteIndex,
    pub python: Option<PythonEnvironment>,
}

impl Environment {
    /// Build from `options`, running the interpreter through `runner` if needed
    pub fn discover<R: InterpreterRunner>(options: &EnvironmentOptions, runner: &R) -> Self {
        if !options.site_dirs.is_empty() {
            tracing::debug!("using {} explicit site dir(s)", options.site_dirs.len());
            return Self {
                index: SiteIndex::scan(&options.site_dirs, &[]),
                python: None,
            };
        }

        let python = options.python.as_deref().unwrap_or(default_python());
        match probe(runner, python) {
            Some(env) => Self {
                index: SiteIndex::scan(&env.sys_path, &env.builtins),
                python: Some(env),
            },
            None => Self {
                index: SiteIndex::empty(),
                python: None,
            },
        }
    }

    /// Summary for the `env` view
    pub fn report(&self) -> EnvironmentReport {
        EnvironmentReport {
            interpreter: self.python.as_ref().map(|p| p.executable.clone()),
            python_version: self.python.as_ref().map(|p| p.version.clone()),
            platform: self
                .python
                .as_ref()
                .map(|p| p.platform.clone())
                .unwrap_or_else(|| Platform::current().system_name().to_string()),
            supported: self.python.as_ref().map(PythonEnvironment::is_supported),
            scanned_dirs: self.index.scanned_dirs().to_vec(),
            module_count: self.index.module_count(),
            distribution_count: self.index.distribution_count(),
            builtin_count: self.index.builtin_count(),
        }
    }

    pub fn into_checker(self) -> Checker<SiteIndex> {
        Checker::new(self.index)
    }
}

/// Description of the inspected environment
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentReport {
    pub interpreter: Option<String>,
    pub python_version: Option<String>,
    pub platform: String,
    /// `None` when no interpreter was queried
    pub supported: Option<bool>,
    pub scanned_dirs: Vec<PathBuf>,
    pub module_count: usize,
    pub distribution_count: usize,
    pub builtin_count: usize,
}
