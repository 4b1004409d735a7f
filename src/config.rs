//! Runtime configuration for techdesk.
//!
//! Collects the database location, optional data directory and default
//! distance unit resolved from CLI arguments. There is no persisted
//! configuration file; everything comes from the command line or defaults.

use crate::app::services::geo::DistanceUnit;
use crate::constants::{
    CUSTOMERS_FILE_NAME, DEFAULT_DATABASE_FILE, INVENTORY_FILE_NAME, MACHINES_FILE_NAME,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file
    pub database_path: PathBuf,

    /// Directory holding inventory.txt / customers.txt / machines.txt,
    /// if bulk loading was requested
    pub data_dir: Option<PathBuf>,

    /// Default unit for distance calculations
    pub default_unit: DistanceUnit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            data_dir: None,
            default_unit: DistanceUnit::Miles,
        }
    }
}

impl Config {
    /// Build a configuration from CLI overrides
    pub fn new(
        database_path: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        default_unit: Option<DistanceUnit>,
    ) -> Self {
        let base = Self::default();
        Self {
            database_path: database_path.unwrap_or(base.database_path),
            data_dir,
            default_unit: default_unit.unwrap_or(base.default_unit),
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(parent) = self.database_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Database directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        if let Some(data_dir) = &self.data_dir {
            if !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data directory does not exist: {}",
                    data_dir.display()
                )));
            }
            for name in [INVENTORY_FILE_NAME, CUSTOMERS_FILE_NAME, MACHINES_FILE_NAME] {
                if !data_dir.join(name).is_file() {
                    return Err(Error::configuration(format!(
                        "Data directory is missing {}: {}",
                        name,
                        data_dir.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Path to the inventory data file, when a data directory is configured
    pub fn inventory_file(&self) -> Option<PathBuf> {
        self.data_file(INVENTORY_FILE_NAME)
    }

    /// Path to the customers data file, when a data directory is configured
    pub fn customers_file(&self) -> Option<PathBuf> {
        self.data_file(CUSTOMERS_FILE_NAME)
    }

    /// Path to the machines data file, when a data directory is configured
    pub fn machines_file(&self) -> Option<PathBuf> {
        self.data_file(MACHINES_FILE_NAME)
    }

    fn data_file(&self, name: &str) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_FILE));
        assert!(config.data_dir.is_none());
        assert_eq!(config.default_unit, DistanceUnit::Miles);
    }

    #[test]
    fn test_overrides_applied() {
        let config = Config::new(
            Some(PathBuf::from("shop.db")),
            None,
            Some(DistanceUnit::Kilometers),
        );
        assert_eq!(config.database_path, PathBuf::from("shop.db"));
        assert_eq!(config.default_unit, DistanceUnit::Kilometers);
    }

    #[test]
    fn test_validate_missing_data_dir() {
        let config = Config::new(None, Some(PathBuf::from("/nonexistent/data")), None);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_data_dir_requires_all_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(INVENTORY_FILE_NAME), "").unwrap();
        fs::write(dir.path().join(CUSTOMERS_FILE_NAME), "").unwrap();

        // machines.txt missing
        let config = Config::new(None, Some(dir.path().to_path_buf()), None);
        assert!(config.validate().is_err());

        fs::write(dir.path().join(MACHINES_FILE_NAME), "").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_data_file_paths() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(None, Some(dir.path().to_path_buf()), None);

        assert_eq!(
            config.inventory_file().unwrap(),
            dir.path().join(INVENTORY_FILE_NAME)
        );
        assert_eq!(
            config.machines_file().unwrap(),
            dir.path().join(MACHINES_FILE_NAME)
        );

        let no_dir = Config::default();
        assert!(no_dir.inventory_file().is_none());
    }
}
