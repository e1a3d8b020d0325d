//! Builder for creating and configuring Companion instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Companion;
use crate::error::{Result, TripError};

/// Builder for creating and configuring [`Companion`] instances.
#[derive(Debug, Clone, Default)]
pub struct CompanionBuilder {
    database_path: Option<PathBuf>,
}

impl CompanionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, follows the XDG Base Directory layout:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the companion, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// `FileSystem` if the database directory cannot be created, `Database`
    /// if the schema cannot be initialized.
    pub async fn build(self) -> Result<Companion> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Using database at {}", db_path.display());
        let companion = Companion::new(db_path);
        companion.with_database(|_| Ok(())).await?;
        Ok(companion)
    }

    /// Returns the default database path under the XDG data directory.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| TripError::XdgDirectory(e.to_string()))
    }
}
