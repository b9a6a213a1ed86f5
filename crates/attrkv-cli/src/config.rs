use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::cli::{Cli, OutputFormat};

pub const DEFAULT_BANNER: &str = "Please input command and param";

/// Shell settings.
///
/// Loaded from an optional TOML file; every key may be omitted. Command-line
/// flags take precedence over the file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Printed once at startup. Empty disables it.
    pub banner: String,
    /// Printed before each line is read.
    pub prompt: String,
    pub format: OutputFormat,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            prompt: String::new(),
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl ShellConfig {
    /// Read a TOML config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Build the effective config: defaults, then the file, then flags.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(format) = cli.format {
            config.format = format;
        }
        if let Some(prompt) = &cli.prompt {
            config.prompt = prompt.clone();
        }
        if cli.quiet {
            config.banner.clear();
        }
        config.level()?;
        Ok(config)
    }

    pub fn level(&self) -> anyhow::Result<Level> {
        self.log_level
            .parse()
            .with_context(|| format!("invalid log_level '{}'", self.log_level))
    }
}
