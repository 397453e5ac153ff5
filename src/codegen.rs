//! Generated code and install instructions for the selection
//!
//! This module provides:
//! - The import block, optionally as a self-checking script
//! - Install commands for every supported platform
//! - Per-package install rows with the current import status
//!
//! Headings follow the configured interface language.

use crate::checker::{install_command, Checker, ModuleResolver};
use crate::config::Language;
use crate::domain::Platform;
use serde::Serialize;
use std::fmt::Write;

/// Width of the `=` rules in the install block
const RULE_WIDTH: usize = 40;

/// Localized text used in the generated blocks
struct Texts {
    import_header: &'static str,
    missing_list: &'static str,
    checking: &'static str,
    imported_ok: &'static str,
    not_found: &'static str,
    must_install: &'static str,
    install_command: &'static str,
    all_imported: &'static str,
    your_system: &'static str,
    commands_heading: &'static str,
    with_sudo: &'static str,
    venv_heading: &'static str,
    venv_hint: &'static str,
    guide_heading: &'static str,
    guide: &'static str,
}

const DE: Texts = Texts {
    import_header: "# Python Import-Anweisungen",
    missing_list: "# Liste für fehlgeschlagene Importe",
    checking: "Überprüfe Module...",
    imported_ok: "erfolgreich importiert",
    not_found: "nicht gefunden",
    must_install: "Folgende Module müssen installiert werden:",
    install_command: "Installationsbefehl:",
    all_imported: "Alle Module wurden erfolgreich importiert!",
    your_system: "Dein System",
    commands_heading: "INSTALLATIONSBEFEHLE FÜR MODULE",
    with_sudo: "# Mit sudo:",
    venv_heading: "VIRTUELLE UMGEBUNG",
    venv_hint: "# Aktiviere zuerst deine virtuelle Umgebung, dann:",
    guide_heading: "INSTALLATIONSANLEITUNG",
    guide: "\
1. WINDOWS:
   - CMD: Öffne die Eingabeaufforderung und kopiere den Befehl
   - PowerShell: Öffne PowerShell und kopiere den PowerShell-Befehl

2. LINUX:
   - Öffne ein Terminal
   - Kopiere den Linux-Befehl
   - Führe den Befehl aus (möglicherweise mit sudo)

3. macOS:
   - Öffne ein Terminal
   - Kopiere den macOS-Befehl
   - Führe den Befehl aus

4. VIRTUELLE UMGEBUNG:
   - Windows: .\\venv\\Scripts\\activate
   - Linux/macOS: source venv/bin/activate
   - Danach: pip install [Module]
",
};

const EN: Texts = Texts {
    import_header: "# Python import statements",
    missing_list: "# Imports that failed",
    checking: "Checking modules...",
    imported_ok: "imported successfully",
    not_found: "not found",
    must_install: "The following modules need to be installed:",
    install_command: "Install command:",
    all_imported: "All modules were imported successfully!",
    your_system: "Your system",
    commands_heading: "INSTALL COMMANDS FOR MODULES",
    with_sudo: "# With sudo:",
    venv_heading: "VIRTUAL ENVIRONMENT",
    venv_hint: "# Activate your virtual environment first, then:",
    guide_heading: "INSTALLATION GUIDE",
    guide: "\
1. WINDOWS:
   - CMD: Open the command prompt and paste the command
   - PowerShell: Open PowerShell and paste the PowerShell command

2. LINUX:
   - Open a terminal
   - Paste the Linux command
   - Run it (possibly with sudo)

3. macOS:
   - Open a terminal
   - Paste the macOS command
   - Run it

4. VIRTUAL ENVIRONMENT:
   - Windows: .\\venv\\Scripts\\activate
   - Linux/macOS: source venv/bin/activate
   - Then: pip install [modules]
",
};

fn texts(language: Language) -> &'static Texts {
    match language {
        Language::De => &DE,
        Language::En => &EN,
    }
}

/// Name used in an `import` statement for a package name
pub fn import_name(package: &str) -> String {
    package.replace('-', "_")
}

/// Import statements for `modules`, or a script that tries each import
/// and prints a pip command for the ones that fail
pub fn import_code<S: AsRef<str>>(modules: &[S], with_tests: bool, language: Language) -> String {
    let t = texts(language);
    let mut code = format!("{}\n", t.import_header);

    if !with_tests {
        for module in modules {
            let _ = writeln!(code, "import {}", import_name(module.as_ref()));
        }
        return code;
    }

    let _ = write!(
        code,
        "\n{}\nmissing_modules = []\n\nprint(\"{}\")\n",
        t.missing_list, t.checking
    );
    for module in modules {
        let module = module.as_ref();
        let _ = write!(
            code,
            "\ntry:\n    import {import}\n    print(\"✅ {module} {ok}\")\n\
             except ImportError:\n    print(\"❌ {module} {missing}\")\n    \
             missing_modules.append(\"{module}\")\n",
            import = import_name(module),
            ok = t.imported_ok,
            missing = t.not_found,
        );
    }
    let _ = write!(
        code,
        "\nif missing_modules:\n    print(\"\\n{}\")\n    for name in missing_modules:\n        \
         print(f\"  - {{name}}\")\n    print(\"\\n{}\")\n    \
         print(f\"pip install {{' '.join(missing_modules)}}\")\nelse:\n    print(\"\\n{}\")\n",
        t.must_install, t.install_command, t.all_imported
    );
    code
}

/// Install commands for all platforms plus short instructions
pub fn install_commands<S: AsRef<str>>(
    modules: &[S],
    current: Platform,
    language: Language,
) -> String {
    let t = texts(language);
    let mut sorted: Vec<&str> = modules.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    sorted.dedup();
    let names = sorted.join(" ");
    let rule = "=".repeat(RULE_WIDTH);

    let mut out = String::new();
    let _ = writeln!(out, "# {}: {}\n", t.your_system, current.system_name());
    let _ = writeln!(out, "# {}\n{}\n", t.commands_heading, rule);

    let _ = writeln!(out, "### WINDOWS (CMD) ###\npip install {}\n", names);
    let _ = writeln!(
        out,
        "### WINDOWS (PowerShell) ###\n& \"python\" -m pip install {}\n",
        names
    );
    let _ = writeln!(out, "### LINUX ###\npython3 -m pip install {}\n", names);
    let _ = writeln!(out, "{}\nsudo python3 -m pip install {}\n", t.with_sudo, names);
    let _ = writeln!(out, "### macOS ###\npython3 -m pip install {}\n", names);
    let _ = writeln!(
        out,
        "### {} ###\n{}\npip install {}\n",
        t.venv_heading, t.venv_hint, names
    );

    let _ = write!(out, "{}\n# {}\n{}\n\n{}", rule, t.guide_heading, rule, t.guide);
    out
}

/// One row of the per-package install table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallRow {
    pub module: String,
    pub command: String,
    pub installed: bool,
}

/// Install command and import status for each module, in the given order
pub fn install_rows<R: ModuleResolver, S: AsRef<str>>(
    modules: &[S],
    checker: &Checker<R>,
    platform: Platform,
) -> Vec<InstallRow> {
    modules
        .iter()
        .map(|m| {
            let module = m.as_ref();
            InstallRow {
                module: module.to_string(),
                command: install_command(module, platform),
                installed: checker.is_importable(module),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::SiteIndex;

    #[test]
    fn test_import_code_plain() {
        let code = import_code(&["numpy", "scikit-learn"], false, Language::En);
        assert_eq!(
            code,
            "# Python import statements\nimport numpy\nimport scikit_learn\n"
        );
    }

    #[test]
    fn test_import_code_german_header() {
        let code = import_code(&["numpy"], false, Language::De);
        assert!(code.starts_with("# Python Import-Anweisungen\n"));
    }

    #[test]
    fn test_import_code_with_tests() {
        let code = import_code(&["flask-cors"], true, Language::En);
        assert!(code.contains("missing_modules = []"));
        assert!(code.contains("try:\n    import flask_cors\n"));
        assert!(code.contains("print(\"✅ flask-cors imported successfully\")"));
        assert!(code.contains("except ImportError:"));
        assert!(code.contains("missing_modules.append(\"flask-cors\")"));
        assert!(code.contains("print(f\"pip install {' '.join(missing_modules)}\")"));
        assert!(code.contains("print(f\"  - {name}\")"));
    }

    #[test]
    fn test_import_code_empty() {
        let modules: [&str; 0] = [];
        assert_eq!(
            import_code(&modules, false, Language::En),
            "# Python import statements\n"
        );
    }

    #[test]
    fn test_install_commands_sections() {
        let block = install_commands(&["requests", "numpy"], Platform::Linux, Language::En);
        assert!(block.starts_with("# Your system: Linux\n"));
        assert!(block.contains("### WINDOWS (CMD) ###\npip install numpy requests\n"));
        assert!(block.contains("& \"python\" -m pip install numpy requests"));
        assert!(block.contains("### LINUX ###\npython3 -m pip install numpy requests\n"));
        assert!(block.contains("sudo python3 -m pip install numpy requests"));
        assert!(block.contains("### macOS ###"));
        assert!(block.contains("### VIRTUAL ENVIRONMENT ###"));
        assert!(block.contains("source venv/bin/activate"));
    }

    #[test]
    fn test_install_commands_german() {
        let block = install_commands(&["numpy"], Platform::MacOs, Language::De);
        assert!(block.starts_with("# Dein System: Darwin\n"));
        assert!(block.contains("INSTALLATIONSBEFEHLE FÜR MODULE"));
        assert!(block.contains("### VIRTUELLE UMGEBUNG ###"));
        assert!(block.contains(".\\venv\\Scripts\\activate"));
    }

    #[test]
    fn test_install_rows() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("six.py"), "").unwrap();
        let checker = Checker::new(SiteIndex::scan(&[dir.path()], &[]));

        let rows = install_rows(&["six", "numpy"], &checker, Platform::Windows);
        assert_eq!(
            rows,
            vec![
                InstallRow {
                    module: "six".to_string(),
                    command: "pip install six".to_string(),
                    installed: true,
                },
                InstallRow {
                    module: "numpy".to_string(),
                    command: "pip install numpy".to_string(),
                    installed: false,
                },
            ]
        );
    }
}
