//! Operating system platform used to pick install command templates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platforms with their own install command template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows (`pip` on PATH)
    Windows,
    /// Linux distributions
    Linux,
    /// macOS, reported by Python as `Darwin`
    MacOs,
    /// Anything else
    Other,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Parse a platform name as reported by `platform.system()` or typed by a user.
    ///
    /// Matching ignores case and surrounding whitespace. Unknown names map
    /// to [`Platform::Other`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "windows" | "win32" | "win" => Platform::Windows,
            "linux" => Platform::Linux,
            "darwin" | "macos" | "mac" | "osx" => Platform::MacOs,
            _ => Platform::Other,
        }
    }

    /// Returns the name Python's `platform.system()` uses for this platform
    pub fn system_name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::MacOs => "Darwin",
            Platform::Other => "Other",
        }
    }

    /// Returns the pip invocation prefix for this platform
    pub fn pip_prefix(&self) -> &'static str {
        match self {
            Platform::Linux | Platform::MacOs => "python3 -m pip install",
            Platform::Windows | Platform::Other => "pip install",
        }
    }

    /// Returns all platforms
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Windows,
            Platform::Linux,
            Platform::MacOs,
            Platform::Other,
        ]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.system_name())
    }
}
