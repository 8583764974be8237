// cmdkit-cli/src/config.rs

//! Optional `Cmdkit.toml` settings for the CLI.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

pub const CONFIG_FILENAME: &str = "Cmdkit.toml";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LoggingConfig {
    /// Default level when neither `RUST_LOG` nor `-v` is given.
    pub level: Option<String>,
    /// Also log to `cmdkit.log` in the cache directory.
    #[serde(default)]
    pub file: bool,
    /// Directory for the log file, overriding the cache directory.
    pub dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

impl CliConfig {
    pub fn from_toml_str(content: &str) -> Result<CliConfig> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| anyhow!(e))
            .context("Failed to parse configuration TOML content. Check TOML syntax.")?;

        if let Some(level) = &config.logging.level {
            level
                .parse::<Level>()
                .map_err(|_| anyhow!("Unknown log level '{}' in [logging].", level))?;
        }
        if let Some(dir) = &config.logging.dir {
            if dir.as_os_str().is_empty() {
                return Err(anyhow!("'logging.dir' in config content is empty."));
            }
        }
        Ok(config)
    }

    pub fn level(&self) -> Option<Level> {
        self.logging.level.as_deref().and_then(|l| l.parse().ok())
    }
}

/// Looks for the config file in `start` and each of its parents.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

/// Loads the nearest config file, or defaults when there is none.
pub fn load_cli_config(start: &Path) -> Result<(CliConfig, Option<PathBuf>)> {
    let Some(config_path) = find_config_file(start) else {
        return Ok((CliConfig::default(), None));
    };
    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
    let config = CliConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config file: {:?}", config_path))?;
    Ok((config, Some(config_path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_parse_success() {
        let content = r#"
            [logging]
            level = "debug"
            file = true

            [output]
            pretty = false
        "#;
        let config = CliConfig::from_toml_str(content).unwrap();
        assert_eq!(config.level(), Some(Level::DEBUG));
        assert!(config.logging.file);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_config_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.output.pretty);
        assert!(config.level().is_none());
    }

    #[test]
    fn test_config_unknown_level() {
        let err = CliConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(err.to_string().contains("Unknown log level 'loud'"), "{}", err);
    }

    #[test]
    fn test_config_bad_toml() {
        assert!(CliConfig::from_toml_str("[logging\nlevel=").is_err());
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "[output]\npretty = false\n").unwrap();

        let (config, path) = load_cli_config(&nested).unwrap();
        assert_eq!(path, Some(dir.path().join(CONFIG_FILENAME)));
        assert!(!config.output.pretty);
    }
}
