//! Run configuration for the organizer.
//!
//! There is no configuration file: an [`OrganizerConfig`] is built once by the
//! caller and handed to the organizer, which only ever reads it. Tests inject a
//! temporary directory through [`OrganizerConfig::new`].

use crate::file_category::{CategoryTable, FOLDERS_DIR};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the append-only move log kept inside the target directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "download_organizer.log";

/// Errors resolving the default target directory.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform reported no home directory.
    #[error("could not determine the home directory")]
    NoHomeDir,
}

/// Immutable settings for one organizer instance.
#[derive(Debug, Clone)]
pub struct OrganizerConfig {
    target_dir: PathBuf,
    log_file_name: String,
    table: CategoryTable,
}

impl OrganizerConfig {
    /// Configuration for `target_dir` with the default category table and log name.
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
            table: CategoryTable::default(),
        }
    }

    /// Configuration for the user's `~/Downloads`.
    pub fn for_downloads() -> Result<Self, ConfigError> {
        Ok(Self::new(default_target_dir()?))
    }

    /// Replaces the category table.
    pub fn with_table(mut self, table: CategoryTable) -> Self {
        self.table = table;
        self
    }

    /// Replaces the log file name.
    pub fn with_log_file_name(mut self, name: &str) -> Self {
        self.log_file_name = name.to_string();
        self
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    pub fn log_file_name(&self) -> &str {
        &self.log_file_name
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.target_dir.join(&self.log_file_name)
    }

    /// Holding folder for stray subdirectories.
    pub fn folders_dir(&self) -> PathBuf {
        self.target_dir.join(FOLDERS_DIR)
    }

    /// Returns true for names the organizer owns at the top level: category
    /// folders and the holding folder.
    pub fn is_managed_dir_name(&self, name: &str) -> bool {
        name == FOLDERS_DIR || self.table.is_category_name(name)
    }
}

/// `~/Downloads` for the current user.
pub fn default_target_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join("Downloads"))
        .ok_or(ConfigError::NoHomeDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_category::Category;

    #[test]
    fn test_new_uses_defaults() {
        let config = OrganizerConfig::new("/tmp/dl");
        assert_eq!(config.target_dir(), Path::new("/tmp/dl"));
        assert_eq!(config.log_file_name(), "download_organizer.log");
        assert_eq!(
            config.log_file_path(),
            PathBuf::from("/tmp/dl/download_organizer.log")
        );
        assert_eq!(config.folders_dir(), PathBuf::from("/tmp/dl/Folders"));
        assert_eq!(config.table().categories().len(), 10);
    }

    #[test]
    fn test_managed_dir_names() {
        let config = OrganizerConfig::new("/tmp/dl");
        assert!(config.is_managed_dir_name("Folders"));
        assert!(config.is_managed_dir_name("Pictures"));
        assert!(config.is_managed_dir_name("Others"));
        assert!(!config.is_managed_dir_name("ProjectX"));
    }

    #[test]
    fn test_builder_overrides() {
        let table = CategoryTable::new(vec![Category::new("Books", &[".epub"])], "Rest");
        let config = OrganizerConfig::new("/tmp/dl")
            .with_table(table)
            .with_log_file_name("moves.log");

        assert_eq!(config.log_file_name(), "moves.log");
        assert!(config.is_managed_dir_name("Books"));
        assert!(config.is_managed_dir_name("Rest"));
        assert!(!config.is_managed_dir_name("Documents"));
    }

    #[test]
    fn test_default_target_dir_is_downloads() {
        if let Ok(dir) = default_target_dir() {
            assert!(dir.ends_with("Downloads"));
        }
    }
}
