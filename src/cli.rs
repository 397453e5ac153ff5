//! CLI argument parsing module for importus

use crate::config::{Language, Theme};
use crate::convert::{DEFAULT_PNG_QUALITY, DEFAULT_QUALITY};
use crate::server::DEFAULT_PORT;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Parse a `WIDTHxHEIGHT` window size
fn parse_window_size(s: &str) -> Result<String, String> {
    let s = s.trim();
    let (width, height) = s
        .split_once('x')
        .ok_or_else(|| format!("invalid window size (expected WIDTHxHEIGHT): {}", s))?;
    for part in [width, height] {
        part.parse::<u32>()
            .map_err(|_| format!("invalid number in window size: {}", part))?;
    }
    Ok(s.to_string())
}

/// Python module explorer and WebP converter
#[derive(Parser, Debug, Clone)]
#[command(
    name = "importus",
    version,
    about = "Python module explorer, import checker and WebP converter"
)]
pub struct CliArgs {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Settings file (default: ~/.python_module_explorer/config.json)
    #[arg(long, global = true, env = "IMPORTUS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Python interpreter to inspect (default: python3, or python on Windows)
    #[arg(long, global = true, value_name = "PATH")]
    pub python: Option<String>,

    /// Scan this directory instead of asking the interpreter (can be specified multiple times)
    #[arg(long = "site-dir", global = true, action = ArgAction::Append, value_name = "DIR")]
    pub site_dirs: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List catalog categories
    Categories,

    /// List the packages of a category
    Modules {
        category: String,
    },

    /// Search package names and descriptions
    Search {
        query: String,
    },

    /// Change or show the selection
    #[command(subcommand)]
    Select(SelectCommand),

    /// Find package names in pasted import statements (reads stdin when no text is given)
    Extract {
        text: Vec<String>,

        /// Add the found names to the selection
        #[arg(long)]
        add: bool,
    },

    /// Check which packages can be imported (default: the selection)
    Check {
        /// Package names, space or comma separated
        names: Vec<String>,

        /// Add packages that cannot be imported to the selection
        #[arg(long)]
        select_missing: bool,
    },

    /// Show the installed version of a package
    Version {
        name: String,
    },

    /// Show the install command of a package
    InstallCommand {
        name: String,

        /// Target platform (Windows, Linux, Darwin; default: this system)
        #[arg(long)]
        platform: Option<String>,
    },

    /// Generate code or commands for the selection
    #[command(subcommand)]
    Generate(GenerateCommand),

    /// Fetch package metadata from PyPI
    Info {
        name: String,
    },

    /// Show the documentation URL of a package
    Docs {
        name: String,
    },

    /// Show simulated popularity scores of a category
    Popularity {
        category: String,
    },

    /// Show or change preferences
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Show the inspected Python environment
    Env,

    /// Serve the catalog and checks as a JSON API
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Convert JPEG and PNG images to WebP
    Convert {
        /// Image files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output directory (default: webp_converted next to the first image)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// WebP quality for JPEG images (0-100)
        #[arg(short, long, default_value_t = DEFAULT_QUALITY,
              value_parser = clap::value_parser!(u8).range(0..=100))]
        quality: u8,

        /// WebP quality for PNG images (0-100)
        #[arg(long, default_value_t = DEFAULT_PNG_QUALITY,
              value_parser = clap::value_parser!(u8).range(0..=100))]
        png_quality: u8,

        /// Encode PNG images losslessly
        #[arg(long)]
        lossless_png: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SelectCommand {
    /// Mark packages
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Unmark packages
    Remove {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Unmark everything
    Clear,
    /// Show the marked packages
    List,
    /// Mark every package of a category
    Category {
        category: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum GenerateCommand {
    /// Import statements for the selection
    Imports {
        /// Wrap the imports in a script that reports missing packages
        #[arg(long)]
        with_tests: bool,
    },
    /// Install commands for every platform
    Install {
        /// Platform noted as the current system
        #[arg(long)]
        platform: Option<String>,
    },
    /// Install command and status of each selected package
    Table {
        /// Platform used for the commands
        #[arg(long)]
        platform: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SettingsCommand {
    /// Show the stored settings
    Show,
    /// Change one or more preferences
    Set {
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        #[arg(long, value_enum)]
        language: Option<Language>,

        /// Window size as WIDTHxHEIGHT
        #[arg(long, value_parser = parse_window_size)]
        window_size: Option<String>,

        #[arg(long)]
        auto_update: Option<bool>,
    },
}

/// Split arguments on commas and whitespace, dropping empty parts
pub fn split_names(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(|c: char| c == ',' || c.is_whitespace()))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_global_defaults() {
        let args = CliArgs::parse_from(["importus", "categories"]);
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(args.python.is_none());
        assert!(args.site_dirs.is_empty());
        assert_eq!(args.command, Command::Categories);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from([
            "importus",
            "check",
            "numpy",
            "--json",
            "--site-dir",
            "/a",
            "--site-dir",
            "/b",
        ]);
        assert!(args.json);
        assert_eq!(args.site_dirs, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(
            args.command,
            Command::Check {
                names: vec!["numpy".to_string()],
                select_missing: false,
            }
        );
    }

    #[test]
    fn test_config_flag() {
        let args = CliArgs::parse_from(["importus", "--config", "/tmp/c.json", "select", "list"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(args.command, Command::Select(SelectCommand::List));
    }

    #[test]
    fn test_select_add_requires_names() {
        assert!(CliArgs::try_parse_from(["importus", "select", "add"]).is_err());
        let args = CliArgs::parse_from(["importus", "select", "add", "numpy", "pandas"]);
        assert_eq!(
            args.command,
            Command::Select(SelectCommand::Add {
                names: vec!["numpy".to_string(), "pandas".to_string()]
            })
        );
    }

    #[test]
    fn test_generate_imports_with_tests() {
        let args = CliArgs::parse_from(["importus", "generate", "imports", "--with-tests"]);
        assert_eq!(
            args.command,
            Command::Generate(GenerateCommand::Imports { with_tests: true })
        );
    }

    #[test]
    fn test_serve_default_port() {
        let args = CliArgs::parse_from(["importus", "serve"]);
        assert_eq!(args.command, Command::Serve { port: 5000 });

        let args = CliArgs::parse_from(["importus", "serve", "--port", "8080"]);
        assert_eq!(args.command, Command::Serve { port: 8080 });
    }

    #[test]
    fn test_convert_requires_paths() {
        assert!(CliArgs::try_parse_from(["importus", "convert"]).is_err());
        let args = CliArgs::parse_from(["importus", "convert", "img", "-o", "out"]);
        assert_eq!(
            args.command,
            Command::Convert {
                paths: vec![PathBuf::from("img")],
                output: Some(PathBuf::from("out")),
                quality: 90,
                png_quality: 95,
                lossless_png: false,
            }
        );
    }

    #[test]
    fn test_convert_quality_flags() {
        let args = CliArgs::parse_from([
            "importus",
            "convert",
            "img",
            "--quality",
            "70",
            "--png-quality",
            "80",
            "--lossless-png",
        ]);
        match args.command {
            Command::Convert {
                quality,
                png_quality,
                lossless_png,
                ..
            } => {
                assert_eq!(quality, 70);
                assert_eq!(png_quality, 80);
                assert!(lossless_png);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(CliArgs::try_parse_from(["importus", "convert", "img", "-q", "101"]).is_err());
    }

    #[test]
    fn test_settings_set() {
        let args = CliArgs::parse_from([
            "importus",
            "settings",
            "set",
            "--theme",
            "dark",
            "--language",
            "en",
            "--window-size",
            "1024x768",
            "--auto-update",
            "true",
        ]);
        assert_eq!(
            args.command,
            Command::Settings(SettingsCommand::Set {
                theme: Some(Theme::Dark),
                language: Some(Language::En),
                window_size: Some("1024x768".to_string()),
                auto_update: Some(true),
            })
        );
    }

    #[test]
    fn test_invalid_window_size() {
        assert!(parse_window_size("big").is_err());
        assert!(parse_window_size("800xabc").is_err());
        assert_eq!(parse_window_size(" 900x700 ").unwrap(), "900x700");
    }

    #[test]
    fn test_split_names() {
        let args = vec!["numpy,pandas".to_string(), " flask  requests ".to_string()];
        assert_eq!(split_names(&args), vec!["numpy", "pandas", "flask", "requests"]);
        assert!(split_names(&[",,".to_string()]).is_empty());
    }
}
