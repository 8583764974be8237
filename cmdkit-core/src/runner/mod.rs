// cmdkit-core/src/runner/mod.rs

//! The command runner.
//!
//! A [`Command`] is either a ready argument list or a raw string. Raw strings
//! are split on whitespace and have one layer of quotes stripped from their
//! quoted tokens (see [`crate::tokens`]). The argument list is then executed
//! and its stdout is decoded as JSON.
//!
//! **Warning:** nothing here validates or sandboxes what gets executed.

pub mod process;

use crate::errors::Result;
use crate::json;
use crate::tokens;
use serde_json::Value;
use tracing::debug;

pub use process::execute;

/// Captured result of a finished child process.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// The exit status code of the command.
    pub status: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Checks if the command executed successfully (status code 0).
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// A command to run, either pre-split or as one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List(Vec<String>),
    Raw(String),
}

impl Command {
    /// Resolves the command into the argument list handed to the executor.
    pub fn into_args(self) -> Vec<String> {
        match self {
            Command::List(args) => args,
            Command::Raw(line) => tokens::normalize(&line),
        }
    }
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        Command::Raw(line.to_string())
    }
}

impl From<String> for Command {
    fn from(line: String) -> Self {
        Command::Raw(line)
    }
}

impl From<Vec<String>> for Command {
    fn from(args: Vec<String>) -> Self {
        Command::List(args)
    }
}

impl From<Vec<&str>> for Command {
    fn from(args: Vec<&str>) -> Self {
        Command::List(args.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Command {
    fn from(args: &[&str]) -> Self {
        Command::List(args.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Command {
    fn from(args: [&str; N]) -> Self {
        Command::List(args.iter().map(|s| s.to_string()).collect())
    }
}

/// Runs `command` and returns its raw stdout.
pub fn capture(command: impl Into<Command>) -> Result<String> {
    let args = command.into().into_args();
    debug!(?args, "Resolved command arguments");
    Ok(execute(&args)?.stdout)
}

/// Runs `command` and decodes its stdout as JSON.
///
/// Fails with [`ProcessExecution`](crate::errors::CmdkitError::ProcessExecution) on a non-zero exit and with
/// [`Decode`](crate::errors::CmdkitError::Decode) when stdout is not valid JSON.
pub fn run(command: impl Into<Command>) -> Result<Value> {
    let decode_stdout = json::try_json_from_text("capture", |command: Command| capture(command));
    // Stdout is always text, so the adapter never yields an absent value here.
    let command: Command = command.into();
    Ok(decode_stdout(command)?.unwrap_or(Value::Null))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::errors::CmdkitError;
    use serde_json::json;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn decoy() -> (TempDir, String) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("decoy.json");
        fs::write(&path, r#"{"spectrum":"blue"}"#).unwrap();
        let path = path.to_string_lossy().to_string();
        (dir, path)
    }

    #[test]
    fn test_command_from_shapes() {
        assert_eq!(Command::from("ls -l"), Command::Raw("ls -l".to_string()));
        assert_eq!(
            Command::from(["ls", "-l"]),
            Command::List(vec!["ls".to_string(), "-l".to_string()])
        );
        assert_eq!(
            Command::from("cat 'a b' \"c\"").into_args(),
            vec!["cat", "'a", "b'", "c"]
        );
        assert_eq!(
            Command::from(vec!["echo", "\"kept\""]).into_args(),
            vec!["echo", "\"kept\""]
        );
    }

    #[test]
    fn test_capture_echo() {
        assert_eq!(capture(["echo", "hello"]).unwrap(), "hello\n");
        assert_eq!(capture("echo   hello").unwrap(), "hello\n");
    }

    #[test]
    fn test_run_echo_json() {
        let value = run(["echo", r#"{"status":"ok"}"#]).unwrap();
        assert_eq!(value, json!({ "status": "ok" }));
    }

    #[test]
    fn test_run_str_cmd() {
        let (_dir, path) = decoy();
        let value = run(format!("cat {}", path)).unwrap();
        assert_eq!(value["spectrum"], "blue");
    }

    #[test]
    fn test_run_str_with_embedded_str() {
        let (_dir, path) = decoy();
        let value = run(format!("cat \"{}\"", path)).unwrap();
        assert_eq!(value["spectrum"], "blue");
        let value = run(format!("cat '{}'", path)).unwrap();
        assert_eq!(value["spectrum"], "blue");
    }

    #[test]
    fn test_run_list_str() {
        let (_dir, path) = decoy();
        let value = run(vec!["cat".to_string(), path]).unwrap();
        assert_eq!(value["spectrum"], "blue");
    }

    #[test]
    fn test_run_non_zero_exit() {
        let err = run(["false"]).unwrap_err();
        assert!(matches!(err, CmdkitError::ProcessExecution { status: 1, .. }), "got {:?}", err);
    }

    #[test]
    fn test_run_non_json_output() {
        let err = run(["echo", "hello"]).unwrap_err();
        assert!(matches!(err, CmdkitError::Decode(_)), "got {:?}", err);
    }

    #[test]
    fn test_run_empty_command() {
        assert!(matches!(run("   "), Err(CmdkitError::EmptyCommand)));
    }
}
