use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage abstraction for the single persisted session snapshot, so the
/// session module can be exercised in isolation. Stores hold the raw snapshot
/// string; all parsing and sanitization stays in `snapshot`.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&self, raw: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Error enumeration for snapshot store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("snapshot store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// Volatile store for tests and embedded callers that manage persistence
/// themselves.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: Mutex<Option<String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(raw: &str) -> Self {
        Self {
            slot: Mutex::new(Some(raw.to_string())),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Unavailable("snapshot slot poisoned".to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, raw: &str) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Unavailable("snapshot slot poisoned".to_string()))?;
        *slot = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Unavailable("snapshot slot poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// Local single-file store, the library's stand-in for the browser key-value
/// storage the assessment originally persisted to.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StoreError::Io(error)),
        }
    }

    fn save(&self, raw: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StoreError::Io(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_round_trips() {
        let store = InMemorySnapshotStore::new();
        assert!(store.load().expect("load").is_none());

        store.save("{\"answers\":{}}").expect("save");
        assert_eq!(store.load().expect("load").as_deref(), Some("{\"answers\":{}}"));

        store.clear().expect("clear");
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn file_store_treats_missing_file_as_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileSnapshotStore::new(dir.path().join("session.json"));

        assert!(store.load().expect("load").is_none());
        store.clear().expect("clearing a missing file is fine");

        store.save("{}").expect("save");
        assert_eq!(store.load().expect("load").as_deref(), Some("{}"));

        store.clear().expect("clear");
        assert!(store.load().expect("load").is_none());
    }
}
