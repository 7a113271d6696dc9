use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage key for the task blob
pub const KEY_TASKS: &str = "tasks";
/// Storage key for the label blob
pub const KEY_LABELS: &str = "labels";

/// Name of the data directory discovered by walking up from the cwd
pub const DATA_DIR_NAME: &str = ".quad";

/// The key-value persistence boundary: two independent keys, whole-blob
/// reads and writes, no deltas and no versioning.
pub trait Storage {
    /// Read a blob. `None` for absent or unreadable keys.
    fn get(&self, key: &str) -> Option<String>;
    /// Overwrite a blob.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> FileStorage {
        FileStorage { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)
    }
}

/// In-memory storage, for tests and ephemeral boards
#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    blobs: HashMap<String, String>,
}

impl Storage for MemStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DataDirError {
    #[error("not a quad board: no {DATA_DIR_NAME}/ directory found (run `qd init`)")]
    NotABoard,
    #[error("cannot resolve data dir '{path}': {source}")]
    BadOverride {
        path: String,
        source: std::io::Error,
    },
}

/// Walk up from `start` looking for an existing data directory
pub fn discover_data_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let dir = current.join(DATA_DIR_NAME);
        if dir.is_dir() {
            return Some(dir);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolve the data directory: start from the `-C` override (or the cwd)
/// and walk up.
pub fn resolve_data_dir(override_dir: Option<&str>) -> Result<PathBuf, DataDirError> {
    let start = match override_dir {
        Some(dir) => fs::canonicalize(dir).map_err(|e| DataDirError::BadOverride {
            path: dir.to_string(),
            source: e,
        })?,
        None => std::env::current_dir().map_err(|e| DataDirError::BadOverride {
            path: ".".to_string(),
            source: e,
        })?,
    };
    discover_data_dir(&start).ok_or(DataDirError::NotABoard)
}
