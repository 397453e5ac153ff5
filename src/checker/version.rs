//! Version detection from Python module source
//!
//! Modules conventionally expose their version as a module-level
//! assignment. The attributes are tried in this order:
//! 1. `__version__`
//! 2. `VERSION`
//! 3. `version`
//!
//! The value may be a string literal or a tuple such as `(1, 2, 3)`,
//! which is joined with dots.

use regex::Regex;
use std::sync::LazyLock;

// `name = "1.2.3"`, `name: str = '1.2.3'`, `name = (1, 2, 3)`
static DUNDER_VERSION: LazyLock<Regex> = LazyLock::new(|| assignment_regex("__version__"));
static UPPER_VERSION: LazyLock<Regex> = LazyLock::new(|| assignment_regex("VERSION"));
static LOWER_VERSION: LazyLock<Regex> = LazyLock::new(|| assignment_regex("version"));

// Element of a version tuple: number or quoted string
static TUPLE_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(?:(\d+)|['"]([^'"]*)['"])$"#).unwrap());

fn assignment_regex(attribute: &str) -> Regex {
    let pattern = format!(
        r#"(?m)^{}\s*(?::\s*[\w\[\], ]+)?=\s*(?:[rbu]?['"]([^'"\n]+)['"]|\(([^)\n]*)\))"#,
        regex::escape(attribute)
    );
    Regex::new(&pattern).unwrap()
}

/// Find a version assignment in `source`, trying each attribute in order
pub fn scan_source(source: &str) -> Option<String> {
    [&*DUNDER_VERSION, &*UPPER_VERSION, &*LOWER_VERSION]
        .into_iter()
        .find_map(|re| extract(re, source))
}

fn extract(re: &Regex, source: &str) -> Option<String> {
    re.captures_iter(source).find_map(|caps| {
        if let Some(literal) = caps.get(1) {
            let value = literal.as_str().trim();
            return (!value.is_empty()).then(|| value.to_string());
        }
        caps.get(2).and_then(|tuple| join_tuple(tuple.as_str()))
    })
}

/// `1, 2, "post1"` → `1.2.post1`; `None` if any element is not a literal
fn join_tuple(inner: &str) -> Option<String> {
    let parts: Option<Vec<&str>> = inner
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let caps = TUPLE_ITEM.captures(p)?;
            caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
        })
        .collect();

    let parts = parts?;
    (!parts.is_empty()).then(|| parts.join("."))
}
