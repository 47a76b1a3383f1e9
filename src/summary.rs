//! Migration summary
//!
//! Sizes and registry descriptions for each unit in the set. Reading files
//! is the only I/O; a missing file contributes zero size and an unreadable
//! one surfaces as a per-file read error without aborting the run.

use std::path::Path;

use tokio::fs;

use crate::domain::MigrationSet;

/// Per-unit outcome of the summarization pass
#[derive(Debug, Clone)]
pub enum UnitStatus {
    /// File read fully into memory as text
    Present { size_kb: f64 },
    /// File not found under the migrations directory
    Absent,
    /// File exists but could not be opened or decoded
    ReadError { message: String },
}

#[derive(Debug, Clone)]
pub struct UnitSummary {
    pub sequence: u32,
    pub file_name: &'static str,
    pub description: &'static str,
    pub status: UnitStatus,
}

#[derive(Debug, Clone)]
pub struct MigrationSummary {
    pub units: Vec<UnitSummary>,
    /// Sum of the sizes of all present files, in kilobytes
    pub total_kb: f64,
}

impl MigrationSummary {
    pub fn read_error_count(&self) -> usize {
        self.units
            .iter()
            .filter(|unit| matches!(unit.status, UnitStatus::ReadError { .. }))
            .count()
    }
}

/// Read every unit's file and compute sizes in kilobytes (bytes / 1024).
/// Descriptions come from the registry, looked up by sequence prefix.
pub async fn summarize(set: &MigrationSet, dir: &Path) -> MigrationSummary {
    let mut units = Vec::with_capacity(set.len());
    let mut total_kb = 0.0;

    for unit in set.units() {
        let path = dir.join(unit.file_name);
        let exists = fs::try_exists(&path).await.unwrap_or(false);
        let status = if !exists {
            UnitStatus::Absent
        } else {
            match fs::read_to_string(&path).await {
                Ok(sql) => {
                    let size_kb = sql.len() as f64 / 1024.0;
                    total_kb += size_kb;
                    UnitStatus::Present { size_kb }
                }
                Err(err) => UnitStatus::ReadError {
                    message: err.to_string(),
                },
            }
        };

        let prefix = format!("{:03}", unit.sequence);
        units.push(UnitSummary {
            sequence: unit.sequence,
            file_name: unit.file_name,
            description: set.description_for_prefix(&prefix),
            status,
        });
    }

    MigrationSummary { units, total_kb }
}
