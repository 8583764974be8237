// cmdkit-cli/src/rendering.rs
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{self, Write};

/// Formats a JSON value for the terminal.
pub fn render_json(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("Failed to render JSON output")
}

pub fn print_json(value: &Value, pretty: bool) -> Result<()> {
    let rendered = render_json(value, pretty)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("Failed to write to stdout")?;
    Ok(())
}

/// Prints captured text exactly as the child produced it.
pub fn print_raw(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write to stdout")
}
