//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose) are inherited by all subcommands
//! - `--source` defaults to the current directory everywhere

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::TemplateFormat;

/// appconfig-synth - synthesize AWS AppConfig CloudFormation templates
#[derive(Parser, Debug)]
#[command(name = "appconfig-synth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Directory holding the content files and `appconfig.toml`
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory containing config-v1.json, config-v2.json and appconfig.toml
    #[arg(short, long, default_value = ".")]
    pub source: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize the template and manifest
    Synth {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory (default: [output] directory, relative to --source)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Template format
        #[arg(short, long, value_enum)]
        format: Option<TemplateFormat>,

        /// Print the template instead of writing files
        #[arg(long)]
        stdout: bool,
    },

    /// Compare a fresh synthesis with the template on disk
    Diff {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory holding the previous template
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Template format
        #[arg(short, long, value_enum)]
        format: Option<TemplateFormat>,
    },

    /// List declared resources and outputs
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Validate config, content files and references without writing
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Commands {
    /// Subcommand name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Synth { .. } => "synth",
            Commands::Diff { .. } => "diff",
            Commands::List { .. } => "list",
            Commands::Check { .. } => "check",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["appconfig-synth"]).is_err());
    }

    #[test]
    fn test_cli_parse_synth_defaults() {
        let cli = Cli::try_parse_from(["appconfig-synth", "synth"]).unwrap();
        if let Commands::Synth {
            source,
            out,
            format,
            stdout,
        } = cli.command
        {
            assert_eq!(source.source, PathBuf::from("."));
            assert_eq!(out, None);
            assert_eq!(format, None);
            assert!(!stdout);
        } else {
            panic!("Expected Synth command");
        }
    }

    #[test]
    fn test_cli_parse_synth_options() {
        let cli = Cli::try_parse_from([
            "appconfig-synth",
            "synth",
            "--source",
            "infra",
            "--out",
            "cdk.out",
            "--format",
            "yaml",
            "--stdout",
        ])
        .unwrap();
        if let Commands::Synth {
            source,
            out,
            format,
            stdout,
        } = cli.command
        {
            assert_eq!(source.source, PathBuf::from("infra"));
            assert_eq!(out, Some(PathBuf::from("cdk.out")));
            assert_eq!(format, Some(TemplateFormat::Yaml));
            assert!(stdout);
        } else {
            panic!("Expected Synth command");
        }
    }

    #[test]
    fn test_cli_parse_diff() {
        let cli = Cli::try_parse_from(["appconfig-synth", "diff", "-s", "infra"]).unwrap();
        assert!(matches!(cli.command, Commands::Diff { .. }));
        assert_eq!(cli.command.name(), "diff");
    }

    #[test]
    fn test_cli_parse_list_and_check() {
        let cli = Cli::try_parse_from(["appconfig-synth", "list"]).unwrap();
        assert_eq!(cli.command.name(), "list");

        let cli = Cli::try_parse_from(["appconfig-synth", "check"]).unwrap();
        assert_eq!(cli.command.name(), "check");
    }

    #[test]
    fn test_cli_json_flag() {
        let cli = Cli::try_parse_from(["appconfig-synth", "--json", "synth"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["appconfig-synth", "check", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["appconfig-synth", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["appconfig-synth", "synth", "--format", "xml"]).is_err());
    }
}
