//! JSON output formatter for machine processing
//!
//! Every command writes exactly one pretty-printed JSON document.

use crate::checker::EnvironmentReport;
use crate::codegen::InstallRow;
use crate::config::Settings;
use crate::convert::ConversionReport;
use crate::domain::{CheckReport, PackageRecord, Platform, SearchHit};
use crate::output::{OutputFormatter, SelectionChange};
use crate::registry::PackageInfo;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }

    fn write_json<T: Serialize>(&self, value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(writer, "{}", json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// A catalog record with its selection mark
#[derive(Serialize)]
struct JsonModule<'a> {
    name: &'a str,
    description: &'a str,
    doc_url: &'a str,
    selected: bool,
}

#[derive(Serialize)]
struct JsonModules<'a> {
    category: &'a str,
    modules: Vec<JsonModule<'a>>,
}

#[derive(Serialize)]
struct JsonSearch<'a> {
    query: &'a str,
    results: &'a [SearchHit],
}

#[derive(Serialize)]
struct JsonSelection<'a> {
    selected: &'a BTreeSet<String>,
}

/// Selection mutation, tagged by action
#[derive(Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum JsonChange<'a> {
    Added {
        added: &'a [String],
        requested: usize,
    },
    Removed {
        removed: &'a [String],
        requested: usize,
    },
    Cleared {
        count: usize,
    },
}

impl<'a> From<&'a SelectionChange> for JsonChange<'a> {
    fn from(change: &'a SelectionChange) -> Self {
        match change {
            SelectionChange::Added { added, requested } => JsonChange::Added {
                added,
                requested: *requested,
            },
            SelectionChange::Removed { removed, requested } => JsonChange::Removed {
                removed,
                requested: *requested,
            },
            SelectionChange::Cleared { count } => JsonChange::Cleared { count: *count },
        }
    }
}

#[derive(Serialize)]
struct JsonExtracted<'a> {
    modules: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    selection: Option<JsonChange<'a>>,
}

#[derive(Serialize)]
struct JsonVersion<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct JsonInstallCommand<'a> {
    name: &'a str,
    platform: &'static str,
    command: &'a str,
}

#[derive(Serialize)]
struct JsonGenerated<'a> {
    kind: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct JsonLookupError<'a> {
    package: &'a str,
    error: &'a str,
}

#[derive(Serialize)]
struct JsonDocUrl<'a> {
    name: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct JsonScore<'a> {
    name: &'a str,
    score: i64,
}

#[derive(Serialize)]
struct JsonPopularity<'a> {
    category: &'a str,
    scores: Vec<JsonScore<'a>>,
}

#[derive(Serialize)]
struct JsonSettings<'a> {
    path: String,
    settings: &'a Settings,
}

/// Conversion report plus its totals
#[derive(Serialize)]
struct JsonConversion<'a> {
    #[serde(flatten)]
    report: &'a ConversionReport,
    total_original: u64,
    total_webp: u64,
    savings_percent: f64,
}

impl OutputFormatter for JsonFormatter {
    fn categories(&self, categories: &[&str], writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_json(&categories, writer)
    }

    fn modules(
        &self,
        category: &str,
        records: &[PackageRecord],
        selected: &BTreeSet<String>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let modules = records
            .iter()
            .map(|r| JsonModule {
                name: &r.name,
                description: &r.description,
                doc_url: &r.doc_url,
                selected: selected.contains(&r.name),
            })
            .collect();
        self.write_json(&JsonModules { category, modules }, writer)
    }

    fn search(
        &self,
        query: &str,
        hits: &[SearchHit],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.write_json(
            &JsonSearch {
                query,
                results: hits,
            },
            writer,
        )
    }

    fn selection(
        &self,
        selected: &BTreeSet<String>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.write_json(&JsonSelection { selected }, writer)
    }

    fn selection_change(
        &self,
        change: &SelectionChange,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.write_json(&JsonChange::from(change), writer)
    }

    fn extracted(
        &self,
        names: &[String],
        change: Option<&SelectionChange>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonExtracted {
            modules: names,
            selection: change.map(JsonChange::from),
        };
        self.write_json(&output, writer)
    }

    fn check_report(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_json(report, writer)
    }

    fn version(&self, name: &str, version: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_json(&JsonVersion { name, version }, writer)
    }

    fn install_command(
        &self,
        name: &str,
        platform: Platform,
        command: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonInstallCommand {
            name,
            platform: platform.system_name(),
            command,
        };
        self.write_json(&output, writer)
    }

    fn generated(
        &self,
        kind: &str,
        content: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.write_json(&JsonGenerated { kind, content }, writer)
    }

    fn install_rows(&self, rows: &[InstallRow], writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_json(&rows, writer)
    }

    fn package_info(&self, info: &PackageInfo, writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_json(info, writer)
    }

    fn lookup_failed(
        &self,
        package: &str,
        message: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.write_json(
            &JsonLookupError {
                package,
                error: message,
            },
            writer,
        )
    }

    fn doc_url(&self, name: &str, url: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_json(&JsonDocUrl { name, url }, writer)
    }

    fn popularity(
        &self,
        category: &str,
        scores: &[(String, i64)],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let scores = scores
            .iter()
            .map(|(name, score)| JsonScore {
                name,
                score: *score,
            })
            .collect();
        self.write_json(&JsonPopularity { category, scores }, writer)
    }

    fn settings(
        &self,
        settings: &Settings,
        path: &Path,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonSettings {
            path: path.display().to_string(),
            settings,
        };
        self.write_json(&output, writer)
    }

    fn environment(
        &self,
        report: &EnvironmentReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.write_json(report, writer)
    }

    fn conversion(
        &self,
        report: &ConversionReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonConversion {
            report,
            total_original: report.total_original(),
            total_webp: report.total_webp(),
            savings_percent: report.savings_percent(),
        };
        self.write_json(&output, writer)
    }
}
