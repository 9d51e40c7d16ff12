//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable text
    Text,
}

/// CLI arguments for quote-sender
#[derive(Parser, Debug)]
#[command(name = "quote-sender")]
#[command(author, version, about = "Generate a quote and text it to every recipient")]
#[command(long_about = r#"
quote-sender generates one short quote and sends it by SMS to every
configured recipient, then exits. It is meant to run as a scheduled job.

Configuration comes from environment variables, optionally seeded from a
.env file (variables already set in the environment take precedence):

  RECIPIENT_PHONE_NUMBERS   comma-separated list of recipients (required)
  AI_PROVIDER               openai | mock (default: mock)
  OPENAI_API_KEY            required when AI_PROVIDER=openai
  OPENAI_MODEL              default: gpt-4o-mini
  NOTIFICATION_PROVIDER     sns | mock (default: mock)
  SNS_TOPIC_ARN             required when NOTIFICATION_PROVIDER=sns
  AWS_REGION                default: us-east-2

The run stops at the first failed delivery and exits with status 1.

Example:
  RECIPIENT_PHONE_NUMBERS=+12025550123 quote-sender --log-format text
"#)]
pub struct Cli {
    /// Path of the .env file to load before reading the environment
    #[arg(long, value_name = "PATH", default_value = ".env")]
    pub env_file: PathBuf,

    /// Do not load any .env file
    #[arg(long, conflicts_with = "env_file")]
    pub no_env_file: bool,

    /// Skip the backend credential check at startup
    #[arg(long)]
    pub skip_credential_check: bool,

    /// Verbosity level (-v = debug, -vv = trace); ignored when RUST_LOG is set
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value = "json")]
    pub log_format: LogFormat,
}
