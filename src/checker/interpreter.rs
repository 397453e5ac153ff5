//! Python interpreter discovery
//!
//! This module provides:
//! - Running the interpreter once to learn `sys.path`, builtin modules and version
//! - A runner trait so the probe can be replaced in tests

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Command;

/// Oldest Python the generated code targets
pub const MIN_PYTHON: (u32, u32) = (3, 6);

/// Prints the environment description as a single JSON object
const PROBE_SCRIPT: &str = "import json, platform, sys; print(json.dumps({\
'executable': sys.executable, \
'version': platform.python_version(), \
'platform': platform.system(), \
'sys_path': [p for p in sys.path if p], \
'builtins': sorted(sys.builtin_module_names)}))";

/// Output of one interpreter invocation
#[derive(Debug, Clone)]
pub struct ProbeOutput {
    /// Whether the process exited successfully
    pub success: bool,
    /// Standard output
    pub stdout: String,
    /// Standard error, or the spawn error
    pub stderr: String,
}

impl ProbeOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Trait for running a Python snippet
pub trait InterpreterRunner {
    /// Run `python -c script` and capture the output
    fn run_script(&self, python: &str, script: &str) -> ProbeOutput;
}

/// Runner that executes the real interpreter
#[derive(Debug, Default)]
pub struct SystemInterpreter;

impl SystemInterpreter {
    pub fn new() -> Self {
        Self
    }
}

impl InterpreterRunner for SystemInterpreter {
    fn run_script(&self, python: &str, script: &str) -> ProbeOutput {
        match Command::new(python).arg("-c").arg(script).output() {
            Ok(output) => ProbeOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            },
            Err(e) => ProbeOutput::failure(format!("Failed to execute {}: {}", python, e)),
        }
    }
}

/// What the interpreter reported about itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonEnvironment {
    pub executable: String,
    pub version: String,
    pub platform: String,
    pub sys_path: Vec<PathBuf>,
    pub builtins: Vec<String>,
}

impl PythonEnvironment {
    /// `(major, minor)` parsed from the version string
    pub fn version_tuple(&self) -> Option<(u32, u32)> {
        let mut parts = self.version.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts
            .next()
            .map(|m| m.chars().take_while(char::is_ascii_digit).collect::<String>())
            .and_then(|m| m.parse().ok())
            .unwrap_or(0);
        Some((major, minor))
    }

    /// Whether the interpreter is at least [`MIN_PYTHON`]
    pub fn is_supported(&self) -> bool {
        self.version_tuple().is_some_and(|v| v >= MIN_PYTHON)
    }
}

/// Interpreter command used when none is configured
pub fn default_python() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Ask `python` about its environment. `None` if it cannot be run or answers garbage.
pub fn probe<R: InterpreterRunner>(runner: &R, python: &str) -> Option<PythonEnvironment> {
    let output = runner.run_script(python, PROBE_SCRIPT);
    if !output.success {
        tracing::warn!(
            "could not query Python interpreter '{}': {}",
            python,
            output.stderr.trim()
        );
        return None;
    }

    match serde_json::from_str::<PythonEnvironment>(output.stdout.trim()) {
        Ok(env) => {
            tracing::debug!(
                "{} is Python {} with {} path entries",
                env.executable,
                env.version,
                env.sys_path.len()
            );
            Some(env)
        }
        Err(e) => {
            tracing::warn!("unexpected output from '{}': {}", python, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock interpreter for testing
    struct MockInterpreter {
        output: ProbeOutput,
    }

    impl InterpreterRunner for MockInterpreter {
        fn run_script(&self, _python: &str, script: &str) -> ProbeOutput {
            assert!(script.contains("sys.path"));
            self.output.clone()
        }
    }

    fn env_with_version(version: &str) -> PythonEnvironment {
        PythonEnvironment {
            executable: "/usr/bin/python3".to_string(),
            version: version.to_string(),
            platform: "Linux".to_string(),
            sys_path: vec![],
            builtins: vec![],
        }
    }

    #[test]
    fn test_probe_parses_output() {
        let runner = MockInterpreter {
            output: ProbeOutput::success(
                r#"{"executable": "/usr/bin/python3", "version": "3.12.1", "platform": "Linux",
                    "sys_path": ["/usr/lib/python3.12", "/usr/lib/python3/dist-packages"],
                    "builtins": ["sys", "_io"]}"#,
            ),
        };
        let env = probe(&runner, "python3").unwrap();
        assert_eq!(env.version, "3.12.1");
        assert_eq!(env.sys_path.len(), 2);
        assert_eq!(env.builtins, vec!["sys", "_io"]);
    }

    #[test]
    fn test_probe_failure() {
        let runner = MockInterpreter {
            output: ProbeOutput::failure("not found"),
        };
        assert!(probe(&runner, "python3").is_none());
    }

    #[test]
    fn test_probe_garbage_output() {
        let runner = MockInterpreter {
            output: ProbeOutput::success("Python 2.7.18"),
        };
        assert!(probe(&runner, "python").is_none());
    }

    #[test]
    fn test_missing_executable() {
        let output = SystemInterpreter::new().run_script("importus-no-such-python", "pass");
        assert!(!output.success);
        assert!(output.stderr.contains("importus-no-such-python"));
    }

    #[test]
    fn test_version_tuple() {
        assert_eq!(env_with_version("3.12.1").version_tuple(), Some((3, 12)));
        assert_eq!(env_with_version("3.13.0rc2").version_tuple(), Some((3, 13)));
        assert_eq!(env_with_version("3").version_tuple(), Some((3, 0)));
        assert_eq!(env_with_version("").version_tuple(), None);
    }

    #[test]
    fn test_is_supported() {
        assert!(env_with_version("3.6.0").is_supported());
        assert!(env_with_version("3.11.4").is_supported());
        assert!(!env_with_version("3.5.9").is_supported());
        assert!(!env_with_version("2.7.18").is_supported());
    }

    #[test]
    fn test_default_python() {
        if cfg!(target_os = "windows") {
            assert_eq!(default_python(), "python");
        } else {
            assert_eq!(default_python(), "python3");
        }
    }
}
