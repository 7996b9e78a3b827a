use crate::{KeyValueStore, StoreError, StoreResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Key-value store persisted as a single JSON document.
///
/// Every write rewrites the whole document with the atomic write pattern:
/// 1. Write to a temp file next to the target
/// 2. Sync to disk (fsync)
/// 3. Rename over the target
///
/// A crash mid-write leaves the previous document intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    recovered_from: Option<PathBuf>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// - missing file: empty store (first launch)
    /// - unreadable file: `StoreError::FileRead`
    /// - unparseable file: backed up to `<name>.corrupted.<timestamp>`, empty store
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if !path.exists() {
            info!("No store file at {path:?} (first launch)");
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
                recovered_from: None,
            });
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::file_read(path.clone(), e))?;

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => {
                info!("Loaded store {path:?} ({} keys)", entries.len());
                Ok(Self {
                    path,
                    entries,
                    recovered_from: None,
                })
            }
            Err(e) => {
                warn!("Store file corrupted at {path:?}: {e}");
                let backup = backup_corrupted(&path)?;
                Ok(Self {
                    path,
                    entries: BTreeMap::new(),
                    recovered_from: Some(backup),
                })
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Backup location if the document was corrupted when opened.
    pub fn recovered_from(&self) -> Option<&Path> {
        self.recovered_from.as_deref()
    }

    fn flush(&self) -> StoreResult<()> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        fs::create_dir_all(&dir).map_err(|e| StoreError::dir_creation(dir.clone(), e))?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("store.json"));
        let temp_path = dir.join(format!("{file_name}.tmp.{}", std::process::id()));

        // Pretty printed for debuggability
        let json = serde_json::to_string_pretty(&self.entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Renames a corrupted document to `<name>.corrupted.{timestamp}`.
fn backup_corrupted(path: &Path) -> StoreResult<PathBuf> {
    let timestamp = chrono::Utc::now().format(DATE_FORMAT);
    let mut backup_name = path.as_os_str().to_owned();
    backup_name.push(format!(".corrupted.{timestamp}"));
    let backup_path = PathBuf::from(backup_name);

    fs::rename(path, &backup_path).map_err(StoreError::backup_failed)?;

    warn!("Backed up corrupted store to {backup_path:?}");
    Ok(backup_path)
}
