use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// cmdkit: run commands and decode their JSON output.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase message verbosity.
    ///
    /// Specify multiple times for more verbose output:
    ///  -v:  INFO level
    ///  -vv: DEBUG level
    ///  -vvv: TRACE level (most verbose)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print compact JSON instead of pretty-printed JSON.
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a command string on whitespace, strip quoted tokens and run it.
    Run {
        /// The whole command line as one string.
        line: String,

        /// Print stdout as text instead of decoding it as JSON.
        #[arg(long)]
        raw: bool,
    },
    /// Run an argument list exactly as given.
    Exec {
        /// Program followed by its arguments.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,

        /// Print stdout as text instead of decoding it as JSON.
        #[arg(long)]
        raw: bool,
    },
    /// Print the contents of a JSON file.
    Read {
        file: PathBuf,
    },
    /// Parse a JSON document and write it to a file.
    Write {
        file: PathBuf,
        /// The JSON document to write.
        json: String,
    },
}
