//! Core domain models for importus
//!
//! This module contains the fundamental types used throughout the application:
//! - Catalog records and search hits
//! - Platforms for install command templates
//! - Import check results

mod check;
mod package;
mod platform;

pub use check::{CheckEntry, CheckReport, VERSION_UNAVAILABLE};
pub use package::{PackageRecord, SearchHit};
pub use platform::Platform;
