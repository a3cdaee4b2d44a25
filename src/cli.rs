use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "cross-seed-config",
    version,
    about = "Validate and render the cross-seed settings for this deployment",
    long_about = "Reads CROSS_SEED_PORT from the environment and a template whose credential placeholders have already been resolved, validates every setting, and writes the configuration file the cross-seed daemon starts with."
)]
pub struct Cli {
    /// Resolved settings template (YAML or JSON)
    #[arg(short, long, value_name = "FILE", env = "CROSS_SEED_TEMPLATE")]
    pub template: PathBuf,

    /// Log level or filter directive
    #[arg(short, long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "CROSS_SEED_JSON_LOGS")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write the validated configuration
    Render {
        /// Output file path; stdout when omitted
        #[arg(short, long, value_name = "FILE", env = "CROSS_SEED_OUTPUT")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Js)]
        format: OutputFormat,
    },

    /// Validate without writing anything
    Check {
        /// Print every setting, secrets redacted
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The subcommand to run; bare invocation renders `config.js` to stdout.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Render {
            output: None,
            format: OutputFormat::Js,
        })
    }
}
