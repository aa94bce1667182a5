use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cfgdrift",
    about = "Database configuration baseline and drift check",
    version,
)]
pub struct Cli {
    /// Profile (credential reference) naming the store to connect to.
    #[arg(short = 'k', long = "profile")]
    pub profile: String,

    /// Profiles file. Defaults to $CFGDRIFT_PROFILES, then
    /// ~/.config/cfgdrift/profiles.toml.
    #[arg(long, value_name = "PATH")]
    pub profiles_file: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Capture the initial configuration baseline; fails if one exists
    Init,
    /// Report drift between the live configuration and the baseline
    Check,
    /// Overwrite the baseline with the current configuration
    Renew,
}
