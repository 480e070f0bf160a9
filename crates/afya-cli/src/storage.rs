//! File-backed token storage in the user's data directory.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use afya_core::{StorageError, TokenStorage};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Token storage persisted as a JSON file.
///
/// The file holds a flat string map, so its keys are exactly the store's
/// `accessToken` and `refreshToken` entries. Reads of a missing or
/// malformed file behave as an empty store; only writes report failures.
#[derive(Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within the process
    lock: Mutex<()>,
}

impl FileTokenStorage {
    /// Create storage at the default location for the platform.
    pub fn new() -> Result<Self> {
        let dirs =
            ProjectDirs::from("", "", "afya").context("Could not determine data directory")?;

        let data_dir = dirs.data_dir();
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;

        Ok(Self::at_path(data_dir.join("tokens.json")))
    }

    /// Create storage over an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> HashMap<String, String> {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };

        match serde_json::from_str(&json) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "Ignoring malformed token file");
                HashMap::new()
            }
        }
    }

    fn save(&self, entries: &HashMap<String, String>) -> afya_core::Result<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|err| StorageError::new(err.to_string()))?;

        fs::write(&self.path, &json).map_err(|err| {
            StorageError::new(format!("failed to write {}: {}", self.path.display(), err))
        })?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(|err| {
                StorageError::new(format!(
                    "failed to set permissions on {}: {}",
                    self.path.display(),
                    err
                ))
            })?;
        }

        Ok(())
    }
}

impl TokenStorage for FileTokenStorage {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().unwrap();
        self.load().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> afya_core::Result<()> {
        let _guard = self.lock.lock().unwrap();
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> afya_core::Result<()> {
        let _guard = self.lock.lock().unwrap();
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
