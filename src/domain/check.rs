//! Import check results

use serde::Serialize;
use std::collections::BTreeMap;

/// Sentinel used when no version can be determined
pub const VERSION_UNAVAILABLE: &str = "N/A";

/// Outcome of checking a single name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckEntry {
    /// Whether the package can be loaded in the inspected environment
    pub importable: bool,
    /// Detected version, or `"N/A"`
    pub version: String,
}

impl CheckEntry {
    pub fn missing() -> Self {
        Self {
            importable: false,
            version: VERSION_UNAVAILABLE.to_string(),
        }
    }
}

/// Check results keyed by the name the user asked for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    entries: BTreeMap<String, CheckEntry>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: CheckEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&CheckEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CheckEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names that can be loaded
    pub fn importable(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, e)| e.importable)
            .map(|(n, _)| n.as_str())
            .collect()
    }

    /// Names that cannot be loaded
    pub fn missing(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, e)| !e.importable)
            .map(|(n, _)| n.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition() {
        let mut report = CheckReport::new();
        report.insert(
            "numpy",
            CheckEntry {
                importable: true,
                version: "1.26.4".to_string(),
            },
        );
        report.insert("nope", CheckEntry::missing());

        assert_eq!(report.len(), 2);
        assert_eq!(report.importable(), vec!["numpy"]);
        assert_eq!(report.missing(), vec!["nope"]);
        assert_eq!(report.get("nope").unwrap().version, "N/A");
    }

    #[test]
    fn test_serializes_as_map() {
        let mut report = CheckReport::new();
        report.insert("nope", CheckEntry::missing());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["nope"]["importable"], false);
        assert_eq!(value["nope"]["version"], "N/A");
    }
}
