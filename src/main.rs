use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod guidance;
mod summary;
mod ui;
mod verify;

use cli::{Cli, Commands, EnvArgs};
use commands::{check, list, report};
use config::Settings;
use domain::REGISTRY;
use ui::{ColorMode, Printer};

fn load_settings(env: EnvArgs) -> Result<Settings> {
    Settings::load(
        env.migrations_dir,
        env.project_url,
        env.service_key,
        env.config.as_deref(),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false) // Disable ANSI escape codes for cleaner output
        .init();

    let mode = if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        ColorMode::Plain
    } else {
        ColorMode::Colorized
    };
    let printer = Printer::new(mode);

    // The built-in registry is static; a contiguity violation is a build-time
    // mistake surfaced here as a config error.
    REGISTRY.validate()?;

    match cli.command {
        Commands::Check { env, format } => {
            let settings = load_settings(env)?;
            check::execute(&settings, &REGISTRY, &printer, format).await?;
        }
        Commands::Report { env } => {
            let settings = load_settings(env)?;
            report::execute(&settings, &REGISTRY, &printer).await?;
        }
        Commands::List => {
            list::execute(&REGISTRY, &printer);
        }
    }

    Ok(())
}
