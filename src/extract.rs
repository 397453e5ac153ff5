//! Package names from pasted import statements
//!
//! A heuristic, not a parser. Text is split into statements on newlines and
//! `;`, then into tokens on whitespace and `,`. Keywords, standard library
//! modules and well-known GUI or plotting symbols are dropped, the first
//! dotted segment is kept, and a few import names are mapped to the name
//! the package is published under.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").unwrap());

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "False", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "None", "nonlocal", "not", "or", "pass", "raise", "return", "True", "try", "while",
    "with", "yield",
];

const STDLIB_MODULES: &[&str] = &[
    "abc", "argparse", "array", "asyncio", "base64", "binascii", "bisect", "builtins",
    "calendar", "cmath", "collections", "concurrent", "contextlib", "copy", "csv", "ctypes",
    "dataclasses", "datetime", "decimal", "difflib", "dis", "email", "enum", "errno", "fnmatch",
    "fractions", "functools", "gc", "getopt", "getpass", "glob", "gzip", "hashlib", "heapq",
    "hmac", "html", "http", "importlib", "inspect", "io", "ipaddress", "itertools", "json",
    "keyword", "logging", "marshal", "math", "mimetypes", "multiprocessing", "netrc", "numbers",
    "operator", "os", "pathlib", "pickle", "pkgutil", "platform", "pprint", "queue", "random",
    "re", "reprlib", "secrets", "select", "shelve", "shlex", "shutil", "signal", "socket",
    "socketserver", "sqlite3", "ssl", "statistics", "string", "stringprep", "struct",
    "subprocess", "sys", "tempfile", "textwrap", "threading", "time", "timeit", "tkinter",
    "token", "tokenize", "traceback", "turtle", "types", "typing", "unicodedata", "unittest",
    "urllib", "uuid", "warnings", "weakref", "webbrowser", "xml", "xmlrpc", "zipfile",
    "zipimport", "zlib",
];

const TYPING_SYMBOLS: &[&str] = &[
    "Any", "Callable", "Dict", "Iterable", "List", "Optional", "Sequence", "Set", "Tuple",
    "TypeVar", "Union", "NewType", "Generic", "Type", "cast", "Final", "Protocol", "TypedDict",
    "Literal", "ClassVar", "NoReturn", "Never", "Annotated", "TypeAlias", "Self",
    "LiteralString",
];

const TKINTER_SYMBOLS: &[&str] = &[
    "tk", "ttk", "messagebox", "scrolledtext", "filedialog", "colorchooser", "simpledialog",
    "Canvas", "Button", "Label", "Frame", "Entry", "Text", "Checkbutton", "Radiobutton", "Scale",
    "Scrollbar", "Listbox", "Menu", "Menubutton", "PanedWindow", "Spinbox", "LabelFrame",
];

const MATPLOTLIB_SYMBOLS: &[&str] = &[
    "plt",
    "pyplot",
    "Figure",
    "Axes",
    "FigureCanvasTkAgg",
    "backend_tkagg",
    "matplotlib.pyplot",
    "matplotlib.backends.backend_tkagg",
];

/// Import name → published package name
const PYPI_ALIASES: &[(&str, &str)] = &[
    ("bs4", "beautifulsoup4"),
    ("PIL", "pillow"),
    ("sklearn", "scikit-learn"),
];

/// Whether a token never names an installable package
pub fn is_denied(token: &str) -> bool {
    [
        PYTHON_KEYWORDS,
        STDLIB_MODULES,
        TYPING_SYMBOLS,
        TKINTER_SYMBOLS,
        MATPLOTLIB_SYMBOLS,
    ]
    .iter()
    .any(|list| list.contains(&token))
}

/// Published package name for an import name
pub fn to_pypi_name(import_name: &str) -> &str {
    PYPI_ALIASES
        .iter()
        .find(|(from, _)| *from == import_name)
        .map(|(_, to)| *to)
        .unwrap_or(import_name)
}

/// Candidate package names found in `text`, deduplicated and sorted
pub fn extract_imports(text: &str) -> Vec<String> {
    let mut found = BTreeSet::new();

    for statement in text
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split(';'))
    {
        let tokens: Vec<&str> = statement
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();
        collect_statement(&tokens, &mut found);
    }

    found.into_iter().collect()
}

/// `from a import b, c` keeps `a`; `import a as b` keeps `a`
fn collect_statement(tokens: &[&str], found: &mut BTreeSet<String>) {
    let mut skip_alias = false;
    let mut in_symbol_list = false;

    for (i, token) in tokens.iter().enumerate() {
        if skip_alias {
            skip_alias = false;
            continue;
        }
        match *token {
            "as" => {
                skip_alias = true;
                continue;
            }
            "import" => {
                in_symbol_list = i > 0 && tokens[..i].contains(&"from");
                continue;
            }
            _ => {}
        }
        if in_symbol_list {
            continue;
        }
        if let Some(name) = candidate(token) {
            found.insert(name);
        }
    }
}

fn candidate(token: &str) -> Option<String> {
    if !IDENTIFIER_RE.is_match(token) || is_denied(token) {
        return None;
    }
    let base = token.split('.').next().filter(|b| !b.is_empty())?;
    if is_denied(base) {
        return None;
    }
    Some(to_pypi_name(base).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_imports() {
        let text = "import numpy\nimport pandas as pd\nfrom requests.auth import HTTPBasicAuth";
        assert_eq!(extract_imports(text), vec!["numpy", "pandas", "requests"]);
    }

    #[test]
    fn test_drops_keywords_and_stdlib() {
        let text = "import os, sys\nfrom typing import List, Optional\nimport json";
        assert!(extract_imports(text).is_empty());
    }

    #[test]
    fn test_dotted_stdlib_is_dropped() {
        assert!(extract_imports("import os.path\nimport xml.etree.ElementTree").is_empty());
    }

    #[test]
    fn test_aliases() {
        let text = "from bs4 import BeautifulSoup\nfrom PIL import Image\nimport sklearn.svm";
        assert_eq!(
            extract_imports(text),
            vec!["beautifulsoup4", "pillow", "scikit-learn"]
        );
    }

    #[test]
    fn test_gui_and_plot_symbols_are_dropped() {
        let text = "import tkinter as tk\nfrom tkinter import ttk\nimport matplotlib.pyplot as plt";
        assert!(extract_imports(text).is_empty());
        assert_eq!(extract_imports("import matplotlib"), vec!["matplotlib"]);
    }

    #[test]
    fn test_semicolons_and_commas() {
        let text = "import flask; import click,rich";
        assert_eq!(extract_imports(text), vec!["click", "flask", "rich"]);
    }

    #[test]
    fn test_bare_names() {
        assert_eq!(
            extract_imports("numpy scipy numpy"),
            vec!["numpy", "scipy"]
        );
    }

    #[test]
    fn test_comments_and_junk() {
        let text = "# import secret\nprint(x)\nimport yaml  # config";
        assert_eq!(extract_imports(text), vec!["yaml"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_imports("").is_empty());
        assert!(extract_imports("   \n\n ; , ").is_empty());
    }

    #[test]
    fn test_to_pypi_name() {
        assert_eq!(to_pypi_name("bs4"), "beautifulsoup4");
        assert_eq!(to_pypi_name("requests"), "requests");
    }
}
