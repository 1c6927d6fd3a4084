// src/core/config_manager.rs
//! Configuration: environment defaults, optional config.yaml, env overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::core::FsOps;

pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub name: String,
    pub data_path: PathBuf,
    pub database_path: PathBuf,
    pub output_path: PathBuf,
    pub log_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub delay: Duration,
}

/// One environment section of config.yaml. Relative paths resolve
/// against the base directory.
#[derive(Debug, Clone, Default, Deserialize)]
struct EnvironmentSection {
    data_path: Option<PathBuf>,
    database_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
    analysis_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentSection,
    #[serde(default)]
    production: EnvironmentSection,
}

impl ConfigManager {
    /// Load configuration for the current process
    pub fn load() -> Result<Self> {
        let environment = Self::environment_name(|key| std::env::var(key).ok());
        info!("Loading configuration for environment: {}", environment);

        let base_dir = if environment == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        let config_path = base_dir.join(CONFIG_FILE_NAME);
        let file_content = if config_path.exists() {
            Some(
                std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?,
            )
        } else {
            None
        };

        let mut config = Self::from_parts(&environment, &base_dir, file_content.as_deref())?;
        config.apply_env_overrides(&base_dir, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn environment_name(lookup: impl Fn(&str) -> Option<String>) -> String {
        lookup("JOBDESK_ENV")
            .or_else(|| lookup("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string())
    }

    /// Build configuration from defaults and an optional config.yaml body
    pub fn from_parts(environment: &str, base_dir: &Path, file_content: Option<&str>) -> Result<Self> {
        let file: ConfigFile = match file_content {
            Some(content) => {
                serde_yaml::from_str(content).context("Failed to parse config.yaml")?
            }
            None => ConfigFile::default(),
        };

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        let resolve = |value: Option<PathBuf>, default: &str| {
            FsOps::normalize_path(base_dir, &value.unwrap_or_else(|| PathBuf::from(default)))
        };

        Ok(Self {
            environment: EnvironmentConfig {
                name: environment.to_string(),
                data_path: resolve(section.data_path, "data"),
                database_path: resolve(section.database_path, "data/jobdesk.db"),
                output_path: resolve(section.output_path, "out"),
                log_path: resolve(section.log_path, "jobdesk.log"),
            },
            analysis: AnalysisConfig {
                delay: Duration::from_millis(
                    section.analysis_delay_ms.unwrap_or(DEFAULT_ANALYSIS_DELAY_MS),
                ),
            },
        })
    }

    fn apply_env_overrides(
        &mut self,
        base_dir: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        if let Some(path) = lookup("JOBDESK_DATABASE") {
            self.environment.database_path = FsOps::normalize_path(base_dir, Path::new(&path));
        }
        if let Some(delay) = lookup("JOBDESK_ANALYSIS_DELAY_MS") {
            let millis = delay
                .trim()
                .parse::<u64>()
                .context("JOBDESK_ANALYSIS_DELAY_MS must be a whole number of milliseconds")?;
            self.analysis.delay = Duration::from_millis(millis);
        }
        Ok(())
    }

    pub fn with_database_path(mut self, path: PathBuf) -> Self {
        self.environment.database_path = path;
        self
    }

    /// Ensure data, output and database directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        FsOps::ensure_dir_exists(&self.environment.data_path).await?;
        FsOps::ensure_dir_exists(&self.environment.output_path).await?;

        if let Some(db_parent) = self.environment.database_path.parent() {
            FsOps::ensure_dir_exists(db_parent).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_config_file() {
        let config = ConfigManager::from_parts("local", Path::new("/work"), None).unwrap();
        assert_eq!(config.environment.database_path, PathBuf::from("/work/data/jobdesk.db"));
        assert_eq!(config.environment.output_path, PathBuf::from("/work/out"));
        assert_eq!(config.analysis.delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_section_is_picked_by_environment() {
        let yaml = r#"
local:
  analysis_delay_ms: 10
production:
  database_path: /var/lib/jobdesk/jobdesk.db
  analysis_delay_ms: 500
"#;
        let local = ConfigManager::from_parts("local", Path::new("/work"), Some(yaml)).unwrap();
        assert_eq!(local.analysis.delay, Duration::from_millis(10));

        let prod = ConfigManager::from_parts("production", Path::new("/app"), Some(yaml)).unwrap();
        assert_eq!(
            prod.environment.database_path,
            PathBuf::from("/var/lib/jobdesk/jobdesk.db")
        );
        assert_eq!(prod.analysis.delay, Duration::from_millis(500));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("JOBDESK_DATABASE", "alt.db"),
            ("JOBDESK_ANALYSIS_DELAY_MS", "0"),
        ]
        .into_iter()
        .collect();
        let mut config = ConfigManager::from_parts("local", Path::new("/work"), None).unwrap();
        config
            .apply_env_overrides(Path::new("/work"), |k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.environment.database_path, PathBuf::from("/work/alt.db"));
        assert_eq!(config.analysis.delay, Duration::ZERO);
    }

    #[test]
    fn test_bad_delay_override_is_rejected() {
        let mut config = ConfigManager::from_parts("local", Path::new("/work"), None).unwrap();
        let result = config.apply_env_overrides(Path::new("/work"), |k| {
            (k == "JOBDESK_ANALYSIS_DELAY_MS").then(|| "soon".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_name_precedence() {
        let name = ConfigManager::environment_name(|k| match k {
            "ENVIRONMENT" => Some("production".to_string()),
            _ => None,
        });
        assert_eq!(name, "production");
        assert_eq!(ConfigManager::environment_name(|_| None), "local");
    }
}
