// cmdkit-core/src/json_file.rs

//! Reading and writing JSON files.

use crate::errors::{CmdkitError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const INDENT: &[u8] = b"    ";

/// A JSON file at a fixed path. Files are read and written as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole file.
    ///
    /// Fails with `NotFound` when the file is missing and with `InvalidJson`
    /// when its content does not parse.
    pub fn read(&self) -> Result<Value> {
        self.read_as()
    }

    /// Reads the file and deserializes it into `T`.
    pub fn read_as<T: DeserializeOwned>(&self) -> Result<T> {
        info!("Reading JSON file: {}", self.path.display());
        let content =
            fs::read_to_string(&self.path).map_err(|e| CmdkitError::from_io(&self.path, e))?;
        serde_json::from_str(&content).map_err(|source| CmdkitError::InvalidJson {
            path: self.path.clone(),
            source,
        })
    }

    /// Serializes `data` with four-space indentation and writes it out,
    /// replacing any previous content.
    ///
    /// Non-ASCII text is written as is. Missing parent directories are not
    /// created. When `data` cannot be serialized the file is left untouched.
    pub fn write<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
        data.serialize(&mut serializer)
            .map_err(|source| CmdkitError::NotSerializable {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, &buffer).map_err(|e| CmdkitError::from_io(&self.path, e))?;
        info!(
            "Wrote {} bytes to JSON file {}",
            buffer.len(),
            self.path.display()
        );
        debug!("JSON file content:\n{}", String::from_utf8_lossy(&buffer));
        Ok(())
    }
}
