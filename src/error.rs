//! Library error types using thiserror
//!
//! Each concern has its own enum; the binary folds them into
//! `anyhow::Error` at the top level.
//!
//! - SettingsError: Issues reading or writing the settings file
//! - RegistryError: Issues with package index communication
//! - ConvertError: Issues with WebP batch conversion
//! - ServerError: Issues starting the HTTP surface

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read the settings file
    #[error("failed to read settings file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the settings file
    #[error("failed to write settings file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the settings directory
    #[error("failed to create settings directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse settings in {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("failed to serialize settings: {message}")]
    SerializeError { message: String },
}

/// Errors related to package index communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in the index
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Index answered with a non-success status other than 404
    #[error("{registry} returned status {status} for '{package}'")]
    UnexpectedStatus {
        package: String,
        registry: String,
        status: u16,
    },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from the index
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

/// Errors related to WebP conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Nothing to convert
    #[error("no JPEG or PNG images found in the given inputs")]
    NoInputFiles,

    /// Failed to create the output directory
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode the source image
    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Failed to encode the WebP output
    #[error("failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Generic IO error
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to the HTTP surface
#[derive(Error, Debug)]
pub enum ServerError {
    /// Could not bind the listening socket
    #[error("failed to bind HTTP server on {addr}: {message}")]
    Bind { addr: String, message: String },

    /// The request loop ended abnormally
    #[error("HTTP server stopped: {message}")]
    Stopped { message: String },
}

impl SettingsError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        SettingsError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// HTTP status the index answered with, if the request got that far
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RegistryError::PackageNotFound { .. } => Some(404),
            RegistryError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message shown to the user in place of the package information
    pub fn display_message(&self) -> String {
        match self.status_code() {
            Some(status) => format!("Error loading information: Status code {}", status),
            None => format!("Error loading information: {}", self),
        }
    }
}

impl ConvertError {
    /// Creates a new Decode error
    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConvertError::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new Encode error
    pub fn encode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConvertError::Encode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new Io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_parse() {
        let err = SettingsError::parse_error("/home/u/config.json", "expected value");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse settings"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_settings_error_write() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SettingsError::write_error("/etc/config.json", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write settings file"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_registry_error_package_not_found() {
        let err = RegistryError::package_not_found("nonexistent-package", "PyPI");
        let msg = format!("{}", err);
        assert!(msg.contains("package 'nonexistent-package' not found"));
        assert!(msg.contains("PyPI"));
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("numpy", "PyPI");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("numpy"));
    }

    #[test]
    fn test_registry_status_code() {
        assert_eq!(
            RegistryError::package_not_found("x", "PyPI").status_code(),
            Some(404)
        );
        let err = RegistryError::UnexpectedStatus {
            package: "x".to_string(),
            registry: "PyPI".to_string(),
            status: 503,
        };
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(RegistryError::timeout("x", "PyPI").status_code(), None);
    }

    #[test]
    fn test_registry_display_message() {
        let err = RegistryError::package_not_found("x", "PyPI");
        assert_eq!(
            err.display_message(),
            "Error loading information: Status code 404"
        );

        let err = RegistryError::network_error("x", "PyPI", "connection refused");
        let msg = err.display_message();
        assert!(msg.starts_with("Error loading information: "));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_convert_error_decode() {
        let err = ConvertError::decode("/tmp/a.png", "bad header");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to decode"));
        assert!(msg.contains("bad header"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ConvertError::NoInputFiles;
        let debug = format!("{:?}", err);
        assert!(debug.contains("NoInputFiles"));
    }
}
