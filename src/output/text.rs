//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Aligned listings of categories, records and search hits
//! - Check results with installed/missing markers
//! - Package index metadata and conversion summaries

use crate::checker::EnvironmentReport;
use crate::codegen::InstallRow;
use crate::config::Settings;
use crate::convert::{format_size, ConversionReport};
use crate::domain::{CheckReport, PackageRecord, Platform, SearchHit};
use crate::output::{OutputFormatter, SelectionChange};
use crate::registry::PackageInfo;
use colored::{ColoredString, Colorize};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// Minimum width of the name column
const MIN_NAME_WIDTH: usize = 20;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Apply `style` when colors are enabled
    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    fn status_marker(&self, ok: bool) -> String {
        if ok {
            self.paint("✓", |t| t.green())
        } else {
            self.paint("✗", |t| t.red())
        }
    }

    fn name_width<'a>(&self, names: impl Iterator<Item = &'a str>) -> usize {
        names.map(|n| n.chars().count()).max().unwrap_or(0).max(MIN_NAME_WIDTH)
    }

    fn write_optional(
        &self,
        label: &str,
        value: Option<&str>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if let Some(value) = value {
            writeln!(writer, "  {:14} {}", format!("{}:", label), value)?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn categories(&self, categories: &[&str], writer: &mut dyn Write) -> std::io::Result<()> {
        for category in categories {
            writeln!(writer, "{}", category)?;
        }
        Ok(())
    }

    fn modules(
        &self,
        category: &str,
        records: &[PackageRecord],
        selected: &BTreeSet<String>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if records.is_empty() {
            return writeln!(writer, "No modules in category '{}'", category);
        }

        writeln!(writer, "{}", self.heading(category))?;
        let width = self.name_width(records.iter().map(|r| r.name.as_str()));
        for record in records {
            let mark = if selected.contains(&record.name) {
                self.paint("[x]", |t| t.green())
            } else {
                "[ ]".to_string()
            };
            writeln!(
                writer,
                "  {} {:width$} {}",
                mark,
                record.name,
                self.dim(&record.description),
                width = width
            )?;
        }
        Ok(())
    }

    fn search(
        &self,
        query: &str,
        hits: &[SearchHit],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if hits.is_empty() {
            return writeln!(writer, "No modules match '{}'", query);
        }

        let width = self.name_width(hits.iter().map(|h| h.record.name.as_str()));
        for hit in hits {
            writeln!(
                writer,
                "  {:width$} {} {}",
                hit.record.name,
                self.dim(&format!("[{}]", hit.category)),
                hit.record.description,
                width = width
            )?;
        }
        writeln!(writer)?;
        writeln!(writer, "{} result(s) for '{}'", hits.len(), query)
    }

    fn selection(
        &self,
        selected: &BTreeSet<String>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if selected.is_empty() {
            return writeln!(writer, "No modules selected");
        }
        for name in selected {
            writeln!(writer, "{}", name)?;
        }
        Ok(())
    }

    fn selection_change(
        &self,
        change: &SelectionChange,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        match change {
            SelectionChange::Added { added, requested } => {
                for name in added {
                    writeln!(writer, "{} {}", self.paint("+", |t| t.green()), name)?;
                }
                let already = requested.saturating_sub(added.len());
                if already > 0 {
                    writeln!(writer, "{}", self.dim(&format!("{} already selected", already)))?;
                }
                Ok(())
            }
            SelectionChange::Removed { removed, requested } => {
                for name in removed {
                    writeln!(writer, "{} {}", self.paint("-", |t| t.red()), name)?;
                }
                let unknown = requested.saturating_sub(removed.len());
                if unknown > 0 {
                    writeln!(writer, "{}", self.dim(&format!("{} were not selected", unknown)))?;
                }
                Ok(())
            }
            SelectionChange::Cleared { count } => {
                writeln!(writer, "Cleared {} selected module(s)", count)
            }
        }
    }

    fn extracted(
        &self,
        names: &[String],
        change: Option<&SelectionChange>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if names.is_empty() {
            return writeln!(writer, "No installable modules found in the input");
        }
        match change {
            Some(change) => self.selection_change(change, writer),
            None => {
                for name in names {
                    writeln!(writer, "{}", name)?;
                }
                Ok(())
            }
        }
    }

    fn check_report(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if report.is_empty() {
            return writeln!(writer, "Nothing to check");
        }

        let width = self.name_width(report.iter().map(|(n, _)| n.as_str()));
        for (name, entry) in report.iter() {
            let version = if entry.importable {
                entry.version.clone()
            } else {
                self.dim("not installed")
            };
            writeln!(
                writer,
                "  {} {:width$} {}",
                self.status_marker(entry.importable),
                name,
                version,
                width = width
            )?;
        }

        let missing = report.missing();
        writeln!(writer)?;
        writeln!(
            writer,
            "{} of {} installed",
            report.len() - missing.len(),
            report.len()
        )?;
        if !missing.is_empty() {
            writeln!(
                writer,
                "{} {}",
                self.dim("Missing:"),
                missing.join(" ")
            )?;
        }
        Ok(())
    }

    fn version(&self, name: &str, version: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{} {}", name, version)
    }

    fn install_command(
        &self,
        _name: &str,
        _platform: Platform,
        command: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", command)
    }

    fn generated(
        &self,
        _kind: &str,
        content: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        write!(writer, "{}", content)
    }

    fn install_rows(&self, rows: &[InstallRow], writer: &mut dyn Write) -> std::io::Result<()> {
        if rows.is_empty() {
            return writeln!(writer, "No modules selected");
        }

        let width = self.name_width(rows.iter().map(|r| r.module.as_str()));
        let command_width = rows.iter().map(|r| r.command.len()).max().unwrap_or(0);
        for row in rows {
            let status = if row.installed {
                self.paint("installed", |t| t.green())
            } else {
                self.paint("not installed", |t| t.red())
            };
            writeln!(
                writer,
                "  {:width$} {:cwidth$} {}",
                row.module,
                row.command,
                status,
                width = width,
                cwidth = command_width
            )?;
        }
        Ok(())
    }

    fn package_info(&self, info: &PackageInfo, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "{} {}",
            self.heading(&info.name),
            self.paint(&info.version, |t| t.cyan())
        )?;
        if let Some(summary) = &info.summary {
            writeln!(writer, "  {}", summary)?;
        }
        writeln!(writer)?;

        let released = info
            .released_at
            .map(|d| d.format("%Y/%m/%d %H:%M").to_string());
        self.write_optional("Released", released.as_deref(), writer)?;
        self.write_optional("Author", info.author.as_deref(), writer)?;
        self.write_optional("Email", info.author_email.as_deref(), writer)?;
        self.write_optional("License", info.license.as_deref(), writer)?;
        self.write_optional("Python", info.requires_python.as_deref(), writer)?;
        self.write_optional("Homepage", info.home_page.as_deref(), writer)?;
        self.write_optional("Docs", info.docs_url.as_deref(), writer)?;
        for (label, url) in &info.project_urls {
            self.write_optional(label, Some(url), writer)?;
        }

        if !info.requires_dist.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "  {}", self.dim("Requires:"))?;
            for requirement in &info.requires_dist {
                writeln!(writer, "    {}", requirement)?;
            }
        }
        Ok(())
    }

    fn lookup_failed(
        &self,
        _package: &str,
        message: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", self.paint(message, |t| t.red()))
    }

    fn doc_url(&self, _name: &str, url: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}", url)
    }

    fn popularity(
        &self,
        category: &str,
        scores: &[(String, i64)],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if scores.is_empty() {
            return writeln!(writer, "No modules in category '{}'", category);
        }

        writeln!(writer, "{}", self.heading(&format!("Popularity: {}", category)))?;
        let width = self.name_width(scores.iter().map(|(n, _)| n.as_str()));
        let top = scores.iter().map(|(_, s)| *s).max().unwrap_or(1).max(1);
        for (name, score) in scores {
            let bar_len = ((*score).max(0) * 30 / top) as usize;
            writeln!(
                writer,
                "  {:width$} {:>6} {}",
                name,
                score,
                self.paint(&"█".repeat(bar_len), |t| t.cyan()),
                width = width
            )?;
        }
        Ok(())
    }

    fn settings(
        &self,
        settings: &Settings,
        path: &Path,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{} {}", self.dim("File:"), path.display())?;
        writeln!(writer, "  theme:            {}", settings.theme)?;
        writeln!(writer, "  language:         {}", settings.language)?;
        writeln!(writer, "  window_size:      {}", settings.window_size)?;
        writeln!(writer, "  auto_update:      {}", settings.auto_update)?;
        writeln!(
            writer,
            "  selected_modules: {}",
            settings.selected_modules.len()
        )
    }

    fn environment(
        &self,
        report: &EnvironmentReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let unknown = self.dim("unknown");
        writeln!(
            writer,
            "Interpreter:   {}",
            report.interpreter.as_deref().unwrap_or(&unknown)
        )?;
        writeln!(
            writer,
            "Python:        {}",
            report.python_version.as_deref().unwrap_or(&unknown)
        )?;
        writeln!(writer, "Platform:      {}", report.platform)?;
        writeln!(
            writer,
            "Index:         {} module(s), {} distribution(s), {} builtin(s)",
            report.module_count, report.distribution_count, report.builtin_count
        )?;
        if !report.scanned_dirs.is_empty() {
            writeln!(writer, "Search path:")?;
            for dir in &report.scanned_dirs {
                writeln!(writer, "  {}", dir.display())?;
            }
        }
        if report.supported == Some(false) {
            writeln!(
                writer,
                "{}",
                self.paint(
                    "Warning: Python 3.6 or newer is recommended",
                    |t| t.yellow()
                )
            )?;
        }
        Ok(())
    }

    fn conversion(
        &self,
        report: &ConversionReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        for file in &report.converted {
            writeln!(writer, "{}", file.describe())?;
        }
        for failure in &report.failed {
            writeln!(
                writer,
                "{}",
                self.paint(&format!("FAILED {}", failure.message), |t| t.red())
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "{}", self.heading("--- SUMMARY ---"))?;
        writeln!(writer, "Converted:      {} file(s)", report.converted.len())?;
        writeln!(writer, "Failed:         {} file(s)", report.failed.len())?;
        if report.total_original() > 0 {
            let total_original = report.total_original();
            let total_webp = report.total_webp();
            let saved = total_original.saturating_sub(total_webp);
            writeln!(writer, "Original total: {}", format_size(total_original))?;
            writeln!(writer, "WebP total:     {}", format_size(total_webp))?;
            writeln!(
                writer,
                "Saved:          {} ({:.1}%)",
                format_size(saved),
                report.savings_percent()
            )?;
        }
        writeln!(writer, "Duration:       {:.1} seconds", report.elapsed_secs)?;
        writeln!(writer, "Output:         {}", report.output_dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CheckEntry;

    fn render(f: impl FnOnce(&TextFormatter, &mut Vec<u8>) -> std::io::Result<()>) -> String {
        let formatter = TextFormatter::with_color(false);
        let mut buf = Vec::new();
        f(&formatter, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_modules_marks_selection() {
        let records = vec![
            PackageRecord::new("numpy", "Arrays", "https://numpy.org/doc/"),
            PackageRecord::new("pandas", "Frames", "https://pandas.pydata.org/docs/"),
        ];
        let selected: BTreeSet<String> = ["pandas".to_string()].into_iter().collect();
        let out = render(|f, w| f.modules("Data", &records, &selected, w));
        assert!(out.contains("[ ] numpy"));
        assert!(out.contains("[x] pandas"));
    }

    #[test]
    fn test_search_empty() {
        let out = render(|f, w| f.search("zzz", &[], w));
        assert_eq!(out, "No modules match 'zzz'\n");
    }

    #[test]
    fn test_check_report() {
        let mut report = CheckReport::new();
        report.insert(
            "numpy",
            CheckEntry {
                importable: true,
                version: "1.26.4".to_string(),
            },
        );
        report.insert("nope", CheckEntry::missing());

        let out = render(|f, w| f.check_report(&report, w));
        assert!(out.contains("✓ numpy"));
        assert!(out.contains("1.26.4"));
        assert!(out.contains("✗ nope"));
        assert!(out.contains("1 of 2 installed"));
        assert!(out.contains("Missing: nope"));
    }

    #[test]
    fn test_selection_change() {
        let change = SelectionChange::Added {
            added: vec!["flask".to_string()],
            requested: 2,
        };
        let out = render(|f, w| f.selection_change(&change, w));
        assert_eq!(out, "+ flask\n1 already selected\n");
    }

    #[test]
    fn test_generated_is_verbatim() {
        let out = render(|f, w| f.generated("imports", "import numpy\n", w));
        assert_eq!(out, "import numpy\n");
    }

    #[test]
    fn test_popularity_bars() {
        let scores = vec![("a".to_string(), 10_000), ("b".to_string(), 5_000)];
        let out = render(|f, w| f.popularity("Backend", &scores, w));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Popularity: Backend");
        assert_eq!(lines[1].matches('█').count(), 30);
        assert_eq!(lines[2].matches('█').count(), 15);
    }

    #[test]
    fn test_environment_warns_on_old_python() {
        let report = EnvironmentReport {
            interpreter: Some("/usr/bin/python3".to_string()),
            python_version: Some("3.5.2".to_string()),
            platform: "Linux".to_string(),
            supported: Some(false),
            scanned_dirs: vec![],
            module_count: 0,
            distribution_count: 0,
            builtin_count: 0,
        };
        let out = render(|f, w| f.environment(&report, w));
        assert!(out.contains("Python:        3.5.2"));
        assert!(out.contains("Python 3.6 or newer"));
    }
}
