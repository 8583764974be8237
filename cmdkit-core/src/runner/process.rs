// cmdkit-core/src/runner/process.rs

//! Process executor: runs one argument list as a child process.

use super::CommandOutput;
use crate::errors::{CmdkitError, Result};
use crate::utils::preview;
use std::time::Instant;
use tracing::{debug, warn};

/// Executes `args[0]` with the remaining elements as its arguments.
///
/// No shell is involved: each element reaches the child as one argument.
/// Stdout and stderr are captured and decoded lossily as UTF-8. The call
/// blocks until the child exits; there is no timeout.
///
/// Returns [`CmdkitError::ProcessExecution`] when the child exits with a
/// non-zero status (a child killed by a signal reports `-1`).
pub fn execute<S: AsRef<str>>(args: &[S]) -> Result<CommandOutput> {
    let (program, rest) = args.split_first().ok_or(CmdkitError::EmptyCommand)?;
    let program = program.as_ref();
    let rest: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();

    debug!(program, args = ?rest, "Executing command");
    let started = Instant::now();

    let output = duct::cmd(program, &rest)
        .stdout_capture()
        .stderr_capture()
        .unchecked() // Status is checked below
        .run()
        .map_err(|source| {
            warn!(program, error = %source, "Failed to spawn command process");
            CmdkitError::Spawn {
                program: program.to_string(),
                source,
            }
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let status = output.status.code().unwrap_or(-1);

    debug!(
        "Command exit status: {} after {:?}\nStdout preview:\n{}\nStderr preview:\n{}",
        status,
        started.elapsed(),
        preview(&stdout, 3, 200),
        preview(&stderr, 3, 200)
    );

    let output = CommandOutput {
        status,
        stdout,
        stderr,
    };
    if !output.success() {
        warn!(program, status, "Command exited with non-zero status");
        return Err(CmdkitError::ProcessExecution {
            program: program.to_string(),
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }
    Ok(output)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_execute_echo() {
        let output = execute(&["echo", "Hello", "Core"]).unwrap();
        assert_eq!(output.status, 0);
        assert_eq!(output.stdout, "Hello Core\n");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_execute_no_shell_interpretation() {
        let output = execute(&["echo", "$HOME | wc"]).unwrap();
        assert_eq!(output.stdout.trim(), "$HOME | wc");
    }

    #[test]
    fn test_execute_non_zero_status() {
        let err = execute(&["sh", "-c", "echo partial; echo oops >&2; exit 3"]).unwrap_err();
        match err {
            CmdkitError::ProcessExecution {
                program,
                status,
                stdout,
                stderr,
            } => {
                assert_eq!(program, "sh");
                assert_eq!(status, 3);
                assert_eq!(stdout, "partial\n");
                assert_eq!(stderr, "oops\n");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_execute_missing_program() {
        let err = execute(&["this_command_does_not_exist_qwertyuiop"]).unwrap_err();
        assert!(matches!(err, CmdkitError::Spawn { .. }), "got {:?}", err);
    }

    #[test]
    fn test_execute_empty() {
        let empty: [&str; 0] = [];
        assert!(matches!(execute(&empty), Err(CmdkitError::EmptyCommand)));
    }
}
