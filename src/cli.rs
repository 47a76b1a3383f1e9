//! CLI definitions for preflight
//!
//! This module contains all CLI argument parsing structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::check::OutputFormat;

#[derive(Parser)]
#[command(
    name = "preflight",
    version,
    about = "Preflight checks for hosted Postgres migrations",
    long_about = "Inspects a directory of SQL migration files, verifies environment\nprerequisites, and prints guidance for applying the migrations through\nthe project dashboard or the supabase CLI. Never executes SQL itself."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output (NO_COLOR is also honored)
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments shared by the check and report subcommands
#[derive(Args)]
pub struct EnvArgs {
    /// Directory containing the NNN_*.sql migration files
    #[arg(long, env = "MIGRATIONS_DIR")]
    pub migrations_dir: Option<PathBuf>,

    /// Base URL of the hosted project
    #[arg(long, env = "SUPABASE_URL")]
    pub project_url: Option<String>,

    /// Service role key (only needed for automated execution)
    #[arg(long, env = "SUPABASE_SERVICE_ROLE_KEY", hide_env_values = true)]
    pub service_key: Option<String>,

    /// Optional settings file (preflight.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify environment prerequisites and exit
    Check {
        #[command(flatten)]
        env: EnvArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run the full preflight report with operator guidance
    Report {
        #[command(flatten)]
        env: EnvArgs,
    },

    /// List the known migration units in application order
    List,
}
