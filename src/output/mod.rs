//! Output formatting for command results
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::checker::EnvironmentReport;
use crate::codegen::InstallRow;
use crate::config::Settings;
use crate::convert::ConversionReport;
use crate::domain::{CheckReport, PackageRecord, Platform, SearchHit};
use crate::registry::PackageInfo;
use std::collections::BTreeSet;
use std::io::{IsTerminal, Write};
use std::path::Path;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments.
    ///
    /// Colors are only used when stdout is a terminal.
    pub fn from_cli(json: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Whether progress indicators may be drawn
    pub fn show_progress(&self) -> bool {
        self.format == OutputFormat::Text
    }
}

/// Selection change made by a `select` or `extract --add` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// Names that were newly marked, out of those requested
    Added { added: Vec<String>, requested: usize },
    /// Names that were unmarked, out of those requested
    Removed { removed: Vec<String>, requested: usize },
    /// Every mark was cleared
    Cleared { count: usize },
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Category names in display order
    fn categories(&self, categories: &[&str], writer: &mut dyn Write) -> std::io::Result<()>;

    /// Records of one category, marking the selected ones
    fn modules(
        &self,
        category: &str,
        records: &[PackageRecord],
        selected: &BTreeSet<String>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Search results
    fn search(&self, query: &str, hits: &[SearchHit], writer: &mut dyn Write)
        -> std::io::Result<()>;

    /// The current selection
    fn selection(&self, selected: &BTreeSet<String>, writer: &mut dyn Write)
        -> std::io::Result<()>;

    /// Result of a selection mutation
    fn selection_change(
        &self,
        change: &SelectionChange,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Names extracted from pasted text
    fn extracted(
        &self,
        names: &[String],
        change: Option<&SelectionChange>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Importability and versions
    fn check_report(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Detected version of one package
    fn version(&self, name: &str, version: &str, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Install command of one package
    fn install_command(
        &self,
        name: &str,
        platform: Platform,
        command: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// A generated code or command block
    fn generated(&self, kind: &str, content: &str, writer: &mut dyn Write)
        -> std::io::Result<()>;

    /// Per-package install table
    fn install_rows(&self, rows: &[InstallRow], writer: &mut dyn Write) -> std::io::Result<()>;

    /// Metadata fetched from the package index
    fn package_info(&self, info: &PackageInfo, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Display-only message for a failed lookup
    fn lookup_failed(
        &self,
        package: &str,
        message: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Documentation URL of one package
    fn doc_url(&self, name: &str, url: &str, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Simulated popularity scores of a category
    fn popularity(
        &self,
        category: &str,
        scores: &[(String, i64)],
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Stored settings and where they live
    fn settings(
        &self,
        settings: &Settings,
        path: &Path,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Inspected Python environment
    fn environment(
        &self,
        report: &EnvironmentReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// WebP batch result
    fn conversion(&self, report: &ConversionReport, writer: &mut dyn Write)
        -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_output_config_default() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
        assert!(config.show_progress());
    }

    #[test]
    fn test_output_config_from_cli_json() {
        let config = OutputConfig::from_cli(true);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.show_progress());
    }

    #[test]
    fn test_output_config_from_cli_text() {
        let config = OutputConfig::from_cli(false);
        assert_eq!(config.format, OutputFormat::Text);
    }
}
