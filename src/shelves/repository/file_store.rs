use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::KeyValueStore;
use crate::utils::file::write_atomically;

// FileStore keeps one `<key>.json` file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> LibraryResult<PathBuf> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(LibraryError::validation(
                format!("invalid storage key {:?}", key).as_str(), Some("key".to_string())));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LibraryResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(LibraryError::from(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> LibraryResult<()> {
        let path = self.path_for(key)?;
        debug!("writing {} bytes to {}", value.len(), path.display());
        write_atomically(&path, value.as_bytes())
    }

    fn remove(&self, key: &str) -> LibraryResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(LibraryError::from(err)),
        }
    }
}
