//! Runtime settings for preflight
//!
//! Settings are constructed once in `main` from flags, environment variables
//! and an optional `preflight.yaml` file, then passed by reference into the
//! verifier and reporter. Flags and environment take precedence over the
//! file. There is no baked-in default for the migrations directory or the
//! project URL; a missing value is a configuration error, not a silent
//! fallback to someone's local path.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::ConfigError;

/// How many characters of the service key are ever shown.
const KEY_PREVIEW_LEN: usize = 20;

/// Optional on-disk settings (`preflight.yaml`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileSettings {
    /// Directory containing the NNN_*.sql migration files
    #[serde(default)]
    pub migrations_dir: Option<PathBuf>,

    /// Base URL of the hosted project
    #[serde(default)]
    pub project_url: Option<String>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content).map_err(|err| {
            ConfigError::ParseError {
                message: err.to_string(),
            }
            .into()
        })
    }
}

/// Resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory containing the NNN_*.sql migration files
    pub migrations_dir: PathBuf,
    /// Base URL of the hosted project (dashboard / management API)
    pub project_url: String,
    /// Privileged service credential; only automated execution needs it
    pub service_key: Option<String>,
}

impl Settings {
    /// Build settings from CLI/env values plus an optional config file.
    ///
    /// # Errors
    /// Returns error if the migrations directory or project URL is provided
    /// nowhere, or if the config file cannot be read or parsed.
    pub fn load(
        migrations_dir: Option<PathBuf>,
        project_url: Option<String>,
        service_key: Option<String>,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let file = match config_path {
            Some(path) => FileSettings::load(path)?,
            None => FileSettings::default(),
        };

        let migrations_dir =
            migrations_dir
                .or(file.migrations_dir)
                .ok_or(ConfigError::MissingField {
                    field: "migrations_dir".to_string(),
                })?;

        let project_url = project_url
            .or(file.project_url)
            .ok_or(ConfigError::MissingField {
                field: "project_url".to_string(),
            })?;

        // An empty key behaves the same as an unset one
        let service_key = service_key.filter(|key| !key.trim().is_empty());

        Ok(Self {
            migrations_dir,
            project_url,
            service_key,
        })
    }

    /// Redacted preview of the service key. Only a short prefix is ever
    /// printed; the full value never reaches the console.
    pub fn service_key_preview(&self) -> Option<String> {
        self.service_key.as_deref().map(|key| {
            let prefix: String = key.chars().take(KEY_PREVIEW_LEN).collect();
            format!("{}...", prefix)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_key(key: Option<&str>) -> Settings {
        Settings::load(
            Some(PathBuf::from("/tmp/migrations")),
            Some("https://example.supabase.co".to_string()),
            key.map(String::from),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_load_requires_migrations_dir() {
        let err = Settings::load(
            None,
            Some("https://example.supabase.co".to_string()),
            None,
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("migrations_dir"));
    }

    #[test]
    fn test_load_requires_project_url() {
        let err =
            Settings::load(Some(PathBuf::from("/tmp/migrations")), None, None, None).unwrap_err();
        assert!(err.to_string().contains("project_url"));
    }

    #[test]
    fn test_empty_service_key_treated_as_unset() {
        let settings = settings_with_key(Some("   "));
        assert!(settings.service_key.is_none());
        assert!(settings.service_key_preview().is_none());
    }

    #[test]
    fn test_service_key_preview_is_truncated() {
        let settings = settings_with_key(Some("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"));
        let preview = settings.service_key_preview().unwrap();
        assert_eq!(preview, "eyJhbGciOiJIUzI1NiIs...");
        assert!(!preview.contains("InR5cCI6IkpXVCJ9"));
    }

    #[test]
    fn test_short_service_key_preview() {
        let settings = settings_with_key(Some("short"));
        assert_eq!(settings.service_key_preview().unwrap(), "short...");
    }

    #[test]
    fn test_file_settings_fill_missing_values() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("preflight.yaml");
        std::fs::write(
            &config_path,
            "migrations_dir: /srv/app/migrations\nproject_url: https://file.supabase.co\n",
        )
        .unwrap();

        let settings = Settings::load(None, None, None, Some(&config_path)).unwrap();
        assert_eq!(settings.migrations_dir, PathBuf::from("/srv/app/migrations"));
        assert_eq!(settings.project_url, "https://file.supabase.co");
    }

    #[test]
    fn test_flags_take_precedence_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("preflight.yaml");
        std::fs::write(&config_path, "project_url: https://file.supabase.co\n").unwrap();

        let settings = Settings::load(
            Some(PathBuf::from("/flag/migrations")),
            Some("https://flag.supabase.co".to_string()),
            None,
            Some(&config_path),
        )
        .unwrap();
        assert_eq!(settings.project_url, "https://flag.supabase.co");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = Settings::load(
            None,
            None,
            None,
            Some(Path::new("/nonexistent/preflight.yaml")),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
