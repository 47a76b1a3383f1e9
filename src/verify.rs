//! Environment verification
//!
//! Read-only checks that decide whether the operator can proceed to the
//! reporting phase. Repeated runs against unchanged filesystem and settings
//! produce identical results; nothing here mutates state or retries.

use std::collections::BTreeSet;
use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::config::Settings;
use crate::domain::MigrationSet;
use crate::error::PreflightError;

/// Snapshot of the environment taken once at the start of a run and
/// discarded after the report is printed.
#[derive(Debug, Clone)]
pub struct EnvironmentSnapshot {
    pub directory_exists: bool,
    pub project_url_present: bool,
    pub service_key_present: bool,
    pub missing_files: BTreeSet<String>,
}

impl EnvironmentSnapshot {
    /// Overall verdict. An absent service key never fails verification;
    /// manual execution paths do not need it.
    pub fn overall_pass(&self) -> bool {
        self.directory_exists && self.project_url_present && self.missing_files.is_empty()
    }

    /// The failed precondition, if any. Directory absence wins over missing
    /// files, which win over the empty-URL case.
    pub fn failure(&self, settings: &Settings) -> Option<PreflightError> {
        if !self.directory_exists {
            return Some(PreflightError::MissingDirectory {
                path: settings.migrations_dir.display().to_string(),
            });
        }
        if !self.missing_files.is_empty() {
            return Some(PreflightError::MissingFiles {
                files: self.missing_files.iter().cloned().collect(),
            });
        }
        if !self.project_url_present {
            return Some(PreflightError::MissingProjectUrl);
        }
        None
    }
}

pub fn verify_directory_exists(path: &Path) -> bool {
    path.is_dir()
}

/// A configuration value counts as present only when non-empty.
pub fn verify_config_present(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// Check each unit's file name against the migrations directory and collect
/// the absent ones.
pub async fn find_missing_files(set: &MigrationSet, dir: &Path) -> BTreeSet<String> {
    let mut missing = BTreeSet::new();
    for unit in set.units() {
        let path = dir.join(unit.file_name);
        let exists = fs::try_exists(&path).await.unwrap_or(false);
        if !exists {
            debug!(file = unit.file_name, "migration file missing");
            missing.insert(unit.file_name.to_string());
        }
    }
    missing
}

/// Build the snapshot. The per-file walk is skipped entirely when the
/// directory itself is absent.
pub async fn verify(settings: &Settings, set: &MigrationSet) -> EnvironmentSnapshot {
    let directory_exists = verify_directory_exists(&settings.migrations_dir);
    let project_url_present = verify_config_present(Some(settings.project_url.as_str()));
    let service_key_present = verify_config_present(settings.service_key.as_deref());

    let missing_files = if directory_exists {
        find_missing_files(set, &settings.migrations_dir).await
    } else {
        BTreeSet::new()
    };

    EnvironmentSnapshot {
        directory_exists,
        project_url_present,
        service_key_present,
        missing_files,
    }
}
