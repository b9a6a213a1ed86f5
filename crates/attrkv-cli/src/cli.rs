use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "attrkv",
    about = "Typed attribute key-value store with a line-oriented shell",
    version,
)]
pub struct Cli {
    /// TOML file with shell settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log at debug level to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Reply format
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Prompt printed before each command is read
    #[arg(long)]
    pub prompt: Option<String>,

    /// Skip the startup banner
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_flag_has_help() {
        use clap::CommandFactory;
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Log at debug level to stderr"));
        assert!(help.contains("Reply format"));
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["attrkv"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.format.is_none());
        assert!(cli.prompt.is_none());
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::try_parse_from(["attrkv", "-c", "shell.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("shell.toml")));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["attrkv", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn parse_verbose_quiet_prompt() {
        let cli = Cli::try_parse_from(["attrkv", "--verbose", "-q", "--prompt", "> "]).unwrap();
        assert!(cli.verbose);
        assert!(cli.quiet);
        assert_eq!(cli.prompt.as_deref(), Some("> "));
    }

    #[test]
    fn reject_unknown_format() {
        assert!(Cli::try_parse_from(["attrkv", "--format", "xml"]).is_err());
    }
}
