pub mod file_store;
pub mod memory_store;

use tracing::warn;
use crate::core::domain::{Configuration, User};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::KeyValueStore;
use crate::shelves::domain::Shelves;

// ShelfStore persists the library and the signed-in user as JSON values in a key-value store.
// It is pure load/save: cross-shelf uniqueness is the manager's concern.
pub struct ShelfStore {
    store: Box<dyn KeyValueStore>,
    library_key: String,
    user_key: String,
}

impl ShelfStore {
    pub fn new(config: &Configuration, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            library_key: config.library_key.to_string(),
            user_key: config.user_key.to_string(),
        }
    }

    // Returns the persisted library, or the empty three-shelf library when
    // nothing was saved yet or the saved value is corrupt. A store that cannot
    // be read at all is an error, so the next save never overwrites it.
    pub fn load(&self) -> LibraryResult<Shelves> {
        match self.try_load() {
            Ok(Some(shelves)) => Ok(shelves),
            Ok(None) => Ok(Shelves::new()),
            Err(err @ LibraryError::StorageCorrupt { .. }) => {
                warn!("falling back to an empty library: {}", err);
                Ok(Shelves::new())
            }
            Err(err) => Err(err),
        }
    }

    pub fn try_load(&self) -> LibraryResult<Option<Shelves>> {
        let json = match self.store.get(self.library_key.as_str())? {
            Some(json) => json,
            None => return Ok(None),
        };
        serde_json::from_str::<Option<Shelves>>(json.as_str()).map_err(|err| {
            LibraryError::storage_corrupt(
                format!("unreadable {} value {:?}", self.library_key, err).as_str())
        })
    }

    pub fn save(&self, shelves: &Shelves) -> LibraryResult<()> {
        let json = serde_json::to_string(shelves)?;
        self.store.set(self.library_key.as_str(), json.as_str())
    }

    pub fn load_user(&self) -> Option<User> {
        match self.store.get(self.user_key.as_str()) {
            Ok(Some(json)) => match serde_json::from_str::<Option<User>>(json.as_str()) {
                Ok(user) => user,
                Err(err) => {
                    warn!("ignoring unreadable {} value: {:?}", self.user_key, err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("failed to read {}: {}", self.user_key, err);
                None
            }
        }
    }

    pub fn save_user(&self, user: &User) -> LibraryResult<()> {
        let json = serde_json::to_string(user)?;
        self.store.set(self.user_key.as_str(), json.as_str())
    }

    pub fn clear_user(&self) -> LibraryResult<()> {
        self.store.remove(self.user_key.as_str())
    }
}
