// cmdkit-core/src/lib.rs

#![doc = include_str!("../../README.md")]

pub mod errors;
pub mod json;
pub mod json_file;
pub mod runner;
pub mod tokens;
pub mod utils;

pub use errors::{CmdkitError, Result};
pub use json::{json_from_text, try_json_from_text, IntoJsonSource, JsonSource};
pub use json_file::JsonFile;
pub use runner::{capture, execute, run, Command, CommandOutput};
pub use tokens::{is_quoted, mutate};
