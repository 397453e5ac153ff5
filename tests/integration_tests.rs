//! Integration tests for importus
//!
//! These tests verify:
//! - Importability and version checks against a fixture site directory
//! - Selection persistence across sessions
//! - Extraction feeding the selection and the generators
//! - WebP conversion of generated images

use importus::checker::{Checker, SiteIndex};
use importus::config::{Language, SettingsStore};
use importus::session::SelectionSession;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A `site-packages` layout with a few installed projects
fn create_site_packages() -> TempDir {
    let dir = create_test_dir();
    let root = dir.path();

    // Package with a literal version
    fs::create_dir_all(root.join("numpy")).unwrap();
    fs::write(root.join("numpy/__init__.py"), "__version__ = \"1.26.4\"\n").unwrap();

    // Package whose version only lives in its dist-info
    fs::create_dir_all(root.join("requests")).unwrap();
    fs::write(
        root.join("requests/__init__.py"),
        "from .__version__ import __title__\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("requests-2.31.0.dist-info")).unwrap();
    fs::write(
        root.join("requests-2.31.0.dist-info/METADATA"),
        "Metadata-Version: 2.1\nName: requests\nVersion: 2.31.0\n\nLong description\n",
    )
    .unwrap();

    // Project whose import name differs from its distribution name
    fs::create_dir_all(root.join("yaml")).unwrap();
    fs::write(root.join("yaml/__init__.py"), "").unwrap();
    fs::create_dir_all(root.join("PyYAML-6.0.1.dist-info")).unwrap();
    fs::write(
        root.join("PyYAML-6.0.1.dist-info/METADATA"),
        "Name: PyYAML\nVersion: 6.0.1\n",
    )
    .unwrap();
    fs::write(root.join("PyYAML-6.0.1.dist-info/top_level.txt"), "_yaml\nyaml\n").unwrap();

    // Single-file module with a tuple version and a compiled extension
    fs::write(root.join("six.py"), "VERSION = (1, 16, 0)\n").unwrap();
    fs::write(root.join("_cffi_backend.cpython-312-x86_64-linux-gnu.so"), b"\x7fELF").unwrap();

    dir
}

fn checker_for(dir: &Path) -> Checker<SiteIndex> {
    Checker::new(SiteIndex::scan(&[dir], &[]))
}

mod importability {
    use super::*;

    #[test]
    fn test_check_importable_keys_by_given_name() {
        let site = create_site_packages();
        let checker = checker_for(site.path());

        let results = checker.check_importable(&["NumPy", "requests", "not-installed"]);
        assert_eq!(results.len(), 3);
        assert!(results["NumPy"]);
        assert!(results["requests"]);
        assert!(!results["not-installed"]);
    }

    #[test]
    fn test_versions_from_source_and_metadata() {
        let site = create_site_packages();
        let checker = checker_for(site.path());

        assert_eq!(checker.get_version("numpy"), "1.26.4");
        assert_eq!(checker.get_version("requests"), "2.31.0");
        assert_eq!(checker.get_version("six"), "1.16.0");
        assert_eq!(checker.get_version("PyYAML"), "6.0.1");
        assert_eq!(checker.get_version("_cffi_backend"), "N/A");
        assert_eq!(checker.get_version("not-installed"), "N/A");
    }

    #[test]
    fn test_check_report_partitions() {
        let site = create_site_packages();
        let checker = checker_for(site.path());

        let report = checker.check(&["numpy", "flask", "yaml"]);
        assert_eq!(report.importable(), vec!["numpy", "yaml"]);
        assert_eq!(report.missing(), vec!["flask"]);
        assert_eq!(report.get("flask").unwrap().version, "N/A");
    }

    #[test]
    fn test_empty_index_reports_everything_missing() {
        let checker = Checker::new(SiteIndex::empty());
        let results = checker.check_importable(&["numpy", "os"]);
        assert!(results.values().all(|loadable| !loadable));
    }
}

mod selection {
    use super::*;

    fn store(dir: &TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("nested/config.json"))
    }

    #[test]
    fn test_selection_survives_restart() {
        let dir = create_test_dir();

        let mut session = SelectionSession::load(store(&dir));
        assert!(session.add("numpy"));
        assert!(!session.add("numpy"));
        session.add_all(["pandas", "Flask"]);
        session.remove("pandas");
        session.set_language(Language::En);

        let reloaded = SelectionSession::load(store(&dir));
        let names: Vec<&str> = reloaded.all().iter().map(String::as_str).collect();
        assert_eq!(names, vec!["Flask", "numpy"]);
        assert_eq!(reloaded.settings().language, Language::En);
    }

    #[test]
    fn test_unknown_keys_are_ignored_and_rewritten() {
        let dir = create_test_dir();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"selected_modules": ["numpy"], "theme": "dark", "legacy": 1}"#,
        )
        .unwrap();

        let mut session = SelectionSession::load(SettingsStore::new(&path));
        assert!(session.contains("numpy"));
        session.add("rich");

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(written.get("legacy").is_none());
        assert_eq!(written["theme"], "dark");
        assert_eq!(written["language"], "de");
        assert_eq!(written["window_size"], "900x700");
        assert_eq!(written["auto_update"], false);
    }
}

mod generation {
    use super::*;
    use importus::codegen::{import_code, install_commands, install_rows};
    use importus::domain::Platform;
    use importus::extract::extract_imports;

    #[test]
    fn test_pasted_code_to_install_commands() {
        let pasted = "import numpy as np\nfrom bs4 import BeautifulSoup\nimport os\n";
        let names = extract_imports(pasted);
        assert_eq!(names, vec!["beautifulsoup4", "numpy"]);

        let commands = install_commands(&names, Platform::Linux, Language::En);
        assert!(commands.contains("python3 -m pip install beautifulsoup4 numpy"));
        assert!(commands.contains("& \"python\" -m pip install beautifulsoup4 numpy"));
    }

    #[test]
    fn test_import_code_uses_import_names() {
        let code = import_code(&["scikit-learn", "numpy"], false, Language::De);
        assert!(code.starts_with("# Python Import-Anweisungen\n"));
        assert!(code.contains("import scikit_learn\n"));
    }

    #[test]
    fn test_install_rows_reflect_environment() {
        let site = create_site_packages();
        let checker = checker_for(site.path());
        let rows = install_rows(&["numpy", "flask"], &checker, Platform::Windows);

        assert_eq!(rows[0].command, "pip install numpy");
        assert!(rows[0].installed);
        assert_eq!(rows[1].module, "flask");
        assert!(!rows[1].installed);
    }
}

mod conversion {
    use super::*;
    use importus::convert::{
        collect_images, convert_batch, default_output_dir, ConvertOptions, DEFAULT_OUTPUT_DIR,
    };
    use importus::progress::Progress;

    fn write_png(path: &Path, width: u32, height: u32) {
        let image = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 7) as u8, (y * 3) as u8, 128])
        });
        image.save(path).unwrap();
    }

    #[test]
    fn test_directory_batch() {
        let dir = create_test_dir();
        let photos = dir.path().join("photos");
        fs::create_dir_all(photos.join("sub")).unwrap();
        write_png(&photos.join("a.png"), 32, 32);
        write_png(&photos.join("sub/b.PNG"), 16, 8);
        fs::write(photos.join("notes.txt"), "skip me").unwrap();

        let files = collect_images(&[photos.clone()]);
        assert_eq!(files.len(), 2);

        let output_dir = default_output_dir(&files);
        assert_eq!(output_dir, photos.join(DEFAULT_OUTPUT_DIR));

        let report = convert_batch(
            &files,
            &output_dir,
            &ConvertOptions::default(),
            &mut Progress::disabled(),
        )
        .unwrap();
        assert_eq!(report.converted.len(), 2);
        assert!(report.failed.is_empty());

        for converted in &report.converted {
            let decoded = image::open(&converted.output).unwrap();
            assert!(decoded.width() > 0);
        }
    }

    #[test]
    fn test_broken_file_does_not_stop_batch() {
        let dir = create_test_dir();
        let good = dir.path().join("good.png");
        let bad = dir.path().join("bad.jpg");
        write_png(&good, 8, 8);
        fs::write(&bad, b"not a jpeg").unwrap();

        let files: Vec<PathBuf> = vec![bad.clone(), good];
        let output_dir = dir.path().join("out");
        let report = convert_batch(
            &files,
            &output_dir,
            &ConvertOptions::default(),
            &mut Progress::disabled(),
        )
        .unwrap();

        assert_eq!(report.converted.len(), 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].source, bad);
        assert!(output_dir.join("good.webp").is_file());
    }
}
