//! Read-only package catalog
//!
//! This module provides:
//! - The built-in catalog of third-party Python packages, grouped by category
//! - Category listing and per-category lookup
//! - Case-insensitive search over names and descriptions
//! - A simulated popularity ranking per category

mod data;

use crate::domain::{PackageRecord, SearchHit};

/// PyPI project page used when a package has no documentation URL
const PYPI_PROJECT_URL: &str = "https://pypi.org/project";

/// Popularity score of the first package in a category
const POPULARITY_TOP: i64 = 10_000;

/// Score drop per rank
const POPULARITY_STEP: i64 = 800;

/// Maximum absolute jitter added to a score
const POPULARITY_JITTER: i64 = 300;

/// Ordered mapping from category name to its package records
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<(String, Vec<PackageRecord>)>,
}

impl Catalog {
    /// Build the catalog from the built-in table
    pub fn builtin() -> Self {
        let categories = data::CATEGORIES
            .iter()
            .map(|(name, entries)| {
                let records = entries
                    .iter()
                    .map(|e| PackageRecord::new(e.name, e.description, e.doc_url))
                    .collect();
                (name.to_string(), records)
            })
            .collect();
        Self { categories }
    }

    /// Build a catalog from explicit categories
    pub fn from_categories(categories: Vec<(String, Vec<PackageRecord>)>) -> Self {
        Self { categories }
    }

    /// Category names in display order
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Records of one category, empty if the category is unknown
    pub fn modules_by_category(&self, category: &str) -> &[PackageRecord] {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, records)| records.as_slice())
            .unwrap_or(&[])
    }

    /// All record names in catalog order (duplicates across categories kept)
    pub fn module_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|(_, records)| records.iter().map(|r| r.name.as_str()))
            .collect()
    }

    /// Case-insensitive substring search on name or description
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.categories
            .iter()
            .flat_map(|(category, records)| {
                records
                    .iter()
                    .filter(|r| r.matches_lowercase(&needle))
                    .map(move |r| SearchHit::new(r.clone(), category.as_str()))
            })
            .collect()
    }

    /// First record whose name matches case-insensitively
    pub fn find(&self, name: &str) -> Option<&PackageRecord> {
        self.categories
            .iter()
            .flat_map(|(_, records)| records.iter())
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Documentation URL for a package, falling back to its PyPI page
    pub fn doc_url(&self, name: &str) -> String {
        match self.find(name) {
            Some(record) if !record.doc_url.is_empty() => record.doc_url.clone(),
            _ => format!("{}/{}/", PYPI_PROJECT_URL, name),
        }
    }

    /// Simulated popularity scores for a category, in catalog order.
    ///
    /// Scores fall with rank; the jitter is derived from the package name so
    /// repeated calls agree.
    pub fn popularity(&self, category: &str) -> Vec<(String, i64)> {
        self.modules_by_category(category)
            .iter()
            .enumerate()
            .map(|(rank, record)| {
                let score = POPULARITY_TOP - rank as i64 * POPULARITY_STEP + jitter(&record.name);
                (record.name.clone(), score)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// FNV-1a hash of the name folded into `[-POPULARITY_JITTER, POPULARITY_JITTER]`
fn jitter(name: &str) -> i64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in name.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    let span = (2 * POPULARITY_JITTER + 1) as u64;
    (hash % span) as i64 - POPULARITY_JITTER
}
