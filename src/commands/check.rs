//! Verification-only subcommand
//!
//! Runs the environment checks and reports the verdict without the full
//! summary or guidance sections. Supports a JSON verdict for scripting; the
//! text output carries no compatibility contract.

use anyhow::Result;
use serde::Serialize;

use crate::config::Settings;
use crate::domain::MigrationSet;
use crate::ui::Printer;
use crate::verify::{self, EnvironmentSnapshot};

/// Output format for the check command. Parsed by clap, so an unknown
/// value is rejected at the command line instead of falling back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Machine-readable verification verdict
#[derive(Debug, Serialize)]
struct CheckVerdict {
    pass: bool,
    directory_exists: bool,
    project_url_present: bool,
    service_key_present: bool,
    missing_files: Vec<String>,
}

impl CheckVerdict {
    fn from_snapshot(snapshot: &EnvironmentSnapshot) -> Self {
        Self {
            pass: snapshot.overall_pass(),
            directory_exists: snapshot.directory_exists,
            project_url_present: snapshot.project_url_present,
            service_key_present: snapshot.service_key_present,
            missing_files: snapshot.missing_files.iter().cloned().collect(),
        }
    }
}

pub async fn execute(
    settings: &Settings,
    set: &MigrationSet,
    printer: &Printer,
    format: OutputFormat,
) -> Result<()> {
    let snapshot = verify::verify(settings, set).await;

    match format {
        OutputFormat::Json => {
            let verdict = CheckVerdict::from_snapshot(&snapshot);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        OutputFormat::Text => {
            print_environment_checks(printer, settings, set, &snapshot);
        }
    }

    if let Some(err) = snapshot.failure(settings) {
        return Err(err.into());
    }
    Ok(())
}

/// Render the per-check lines. Shared with the report pipeline.
pub fn print_environment_checks(
    printer: &Printer,
    settings: &Settings,
    set: &MigrationSet,
    snapshot: &EnvironmentSnapshot,
) {
    printer.step(1, 4, "Verifying Environment");

    let mut passed = 0;
    let mut total = 0;

    total += 1;
    if snapshot.directory_exists {
        passed += 1;
        printer.check_pass(&format!(
            "Migrations directory: {}",
            settings.migrations_dir.display()
        ));
    } else {
        printer.check_fail(&format!(
            "Migrations directory not found: {}",
            settings.migrations_dir.display()
        ));
    }

    total += 1;
    if snapshot.project_url_present {
        passed += 1;
        printer.check_pass(&format!("Project URL: {}", settings.project_url));
    } else {
        printer.check_fail("Project URL is empty");
    }

    total += 1;
    match settings.service_key_preview() {
        Some(preview) => {
            passed += 1;
            printer.check_pass(&format!("Service key configured: {}", preview));
        }
        None => {
            printer.check_warn("Service key not set (manual execution paths do not need it)");
        }
    }

    if snapshot.directory_exists {
        total += 1;
        if snapshot.missing_files.is_empty() {
            passed += 1;
            printer.check_pass(&format!("All {} migration files present", set.len()));
        } else {
            let names: Vec<&str> = snapshot.missing_files.iter().map(String::as_str).collect();
            printer.check_fail(&format!("Missing migration files: {}", names.join(", ")));
        }
    }

    printer.plain("");
    printer.plain(&format!("  Result: {}/{} checks passed", passed, total));
}
