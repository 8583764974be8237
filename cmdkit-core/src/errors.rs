// cmdkit-core/src/errors.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the command runner, the JSON adapter and JSON file I/O.
#[derive(Error, Debug)]
pub enum CmdkitError {
    /// The command resolved to an empty argument list.
    #[error("Command Error: no program to execute (empty command)")]
    EmptyCommand,

    /// The child process could not be started at all.
    #[error("Spawn Error: failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The child process ran but exited with a non-zero status.
    #[error("Process Error: '{program}' exited with status {status}: {}", stderr.trim())]
    ProcessExecution {
        program: String,
        status: i32,
        stdout: String,
        stderr: String,
    },

    /// Text that had to be JSON was not.
    #[error("Decode Error: line {}, column {}: {0}", .0.line(), .0.column())]
    Decode(#[source] serde_json::Error),

    /// The JSON adapter was given a result that is neither absent nor text.
    #[error("Type Error: expected JSON string from {producer}, got {found}")]
    TypeMismatch { producer: String, found: String },

    #[error("File Error: '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("File Error: '{}' is not valid JSON: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("File Error: data for '{}' is not serializable: {source}", path.display())]
    NotSerializable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("File Error: I/O failure on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CmdkitError>;

impl CmdkitError {
    /// Maps an I/O error on `path` to `NotFound` or `Io`.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            CmdkitError::NotFound { path }
        } else {
            CmdkitError::Io { path, source }
        }
    }

    /// Exit status of the failed child process, if this is a process error.
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            CmdkitError::ProcessExecution { status, .. } => Some(*status),
            _ => None,
        }
    }
}
