//! Catalog record structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A package listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Package name as shown to the user
    pub name: String,
    /// Short description
    pub description: String,
    /// Documentation URL
    pub doc_url: String,
}

impl PackageRecord {
    /// Creates a new package record
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        doc_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            doc_url: doc_url.into(),
        }
    }

    /// Returns true if the name or description contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

impl fmt::Display for PackageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.description)
    }
}

/// A search result: the record plus the category it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub record: PackageRecord,
    pub category: String,
}

impl SearchHit {
    pub fn new(record: PackageRecord, category: impl Into<String>) -> Self {
        Self {
            record,
            category: category.into(),
        }
    }
}
