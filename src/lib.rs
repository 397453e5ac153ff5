//! importus - Python module explorer and WebP converter library
//!
//! This library provides:
//! - A curated catalog of Python packages by category
//! - A persistent selection of packages
//! - Importability and version checks against a Python environment
//! - Import code and install command generation
//! - PyPI metadata lookup and a JSON API over HTTP
//! - Batch conversion of JPEG and PNG images to WebP

pub mod catalog;
pub mod checker;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod output;
pub mod progress;
pub mod registry;
pub mod server;
pub mod session;
