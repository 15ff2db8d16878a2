use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// KeyValueStore abstracts the persisted client storage holding the library and user keys.
// Writes replace the whole value; readers never observe a partially written value.
pub trait KeyValueStore: Sync + Send {
    // returns the value for a key, None when it was never written
    fn get(&self, key: &str) -> LibraryResult<Option<String>>;

    // overwrites the value for a key
    fn set(&self, key: &str, value: &str) -> LibraryResult<()>;

    // removes a key, succeeding when it is already absent
    fn remove(&self, key: &str) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub enum RepositoryStore {
    InMemory,
    LocalFile(PathBuf),
}
