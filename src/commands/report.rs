//! Full preflight report pipeline
//!
//! A single linear pass: verify -> summarize -> guidance -> banner. A failed
//! verification stops the run at that point with exit code 1; nothing is
//! retried and no partial summary is printed.

use anyhow::Result;

use crate::commands::check;
use crate::config::Settings;
use crate::domain::MigrationSet;
use crate::guidance;
use crate::summary::{self, MigrationSummary, UnitStatus};
use crate::ui::Printer;
use crate::verify;

pub async fn execute(settings: &Settings, set: &MigrationSet, printer: &Printer) -> Result<()> {
    printer.header("Database Migration Preflight");

    let snapshot = verify::verify(settings, set).await;
    check::print_environment_checks(printer, settings, set, &snapshot);
    if let Some(err) = snapshot.failure(settings) {
        printer.error("Environment verification failed");
        return Err(err.into());
    }

    let summary = summary::summarize(set, &settings.migrations_dir).await;
    print_summary(printer, &summary);

    guidance::print_execution_options(printer, settings);
    guidance::print_next_steps(printer);

    printer.plain("");
    printer.success_banner("Migration preflight complete - ready for execution");
    Ok(())
}

fn print_summary(printer: &Printer, summary: &MigrationSummary) {
    printer.step(2, 4, "Migration Summary");
    printer.plain("");
    printer.plain(&format!(
        "  {} migrations will be applied in this order:",
        summary.units.len()
    ));
    printer.plain("");

    for unit in &summary.units {
        match &unit.status {
            UnitStatus::Present { size_kb } => {
                printer.plain(&format!(
                    "  {:2}. {} ({:.1}KB) - {}",
                    unit.sequence, unit.file_name, size_kb, unit.description
                ));
            }
            UnitStatus::Absent => {
                printer.check_fail(&format!("{} (missing)", unit.file_name));
            }
            UnitStatus::ReadError { message } => {
                printer.check_fail(&format!("Error reading {}: {}", unit.file_name, message));
            }
        }
    }

    printer.plain("");
    printer.plain(&format!("  Total SQL size: {:.1}KB", summary.total_kb));
    if summary.read_error_count() > 0 {
        printer.check_warn(&format!(
            "{} file(s) could not be read; sizes exclude them",
            summary.read_error_count()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::REGISTRY;
    use crate::error::PreflightError;
    use crate::ui::ColorMode;
    use std::path::Path;
    use tempfile::TempDir;

    fn settings_for(dir: &Path) -> Settings {
        Settings {
            migrations_dir: dir.to_path_buf(),
            project_url: "https://example.supabase.co".to_string(),
            service_key: None,
        }
    }

    fn populate_all(dir: &Path) {
        for unit in REGISTRY.units() {
            std::fs::write(dir.join(unit.file_name), "SELECT 1;\n").unwrap();
        }
    }

    #[tokio::test]
    async fn test_complete_directory_reports_successfully() {
        let tmp = TempDir::new().unwrap();
        populate_all(tmp.path());

        let printer = Printer::new(ColorMode::Plain);
        execute(&settings_for(tmp.path()), &REGISTRY, &printer)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_aborts_with_typed_error() {
        let tmp = TempDir::new().unwrap();
        populate_all(tmp.path());
        std::fs::remove_file(tmp.path().join("009_create_organization_qualiopi_status.sql"))
            .unwrap();

        let printer = Printer::new(ColorMode::Plain);
        let err = execute(&settings_for(tmp.path()), &REGISTRY, &printer)
            .await
            .unwrap_err();
        match err.downcast_ref::<PreflightError>() {
            Some(PreflightError::MissingFiles { files }) => {
                assert_eq!(
                    files,
                    &vec!["009_create_organization_qualiopi_status.sql".to_string()]
                );
            }
            other => panic!("expected MissingFiles, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_directory_aborts_with_typed_error() {
        let printer = Printer::new(ColorMode::Plain);
        let settings = settings_for(Path::new("/nonexistent/preflight-migrations"));
        let err = execute(&settings, &REGISTRY, &printer).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PreflightError>(),
            Some(PreflightError::MissingDirectory { .. })
        ));
    }
}
