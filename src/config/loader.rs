//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Schedule;

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml").unwrap();
/// println!("Default shift starts at {}", loader.schedule().start);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be read
    /// and [`EngineError::ConfigParseError`] when it is not valid YAML for
    /// a [`ServiceConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Builds a loader directly from an in-memory configuration.
    pub fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the configured default schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.config.schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use chrono_tz::Tz;

    #[test]
    fn test_load_repository_default_config() {
        let loader = ConfigLoader::load("./config/default.yaml").unwrap();
        assert_eq!(
            loader.schedule().start,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            loader.schedule().end,
            NaiveTime::from_hms_opt(18, 0, 0).unwrap()
        );
        assert_eq!(loader.schedule().timezone, Tz::Asia__Manila);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = ConfigLoader::load("/nonexistent/config.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/config.yaml"));
    }

    #[test]
    fn test_from_config_round_trips() {
        let config = ServiceConfig {
            schedule: Schedule::new(
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
                Tz::UTC,
            ),
        };
        let loader = ConfigLoader::from_config(config.clone());
        assert_eq!(loader.config(), &config);
    }
}
