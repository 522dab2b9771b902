//! Path management for Spendwise
//!
//! Provides platform-aware path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDWISE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spendwise` or `~/.config/spendwise`
//! 3. Windows: `%APPDATA%\spendwise`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::SpendwiseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPENDWISE_DATA_DIR";

/// Manages all paths used by Spendwise
#[derive(Debug, Clone)]
pub struct SpendwisePaths {
    /// Base directory for all Spendwise data
    base_dir: PathBuf,
}

impl SpendwisePaths {
    /// Create a new SpendwisePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, SpendwiseError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SpendwisePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/spendwise/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/spendwise/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Resolve a store file name against the data directory
    ///
    /// Absolute names are returned unchanged so a store can live anywhere.
    pub fn store_file(&self, name: &str) -> PathBuf {
        let path = PathBuf::from(name);
        if path.is_absolute() {
            path
        } else {
            self.data_dir().join(path)
        }
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SpendwiseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendwiseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendwiseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendwiseError> {
    let dirs = BaseDirs::new().ok_or_else(|| {
        SpendwiseError::Config(format!(
            "Could not determine a home directory; set {} instead",
            DATA_DIR_ENV
        ))
    })?;
    Ok(dirs.config_dir().join("spendwise"))
}
