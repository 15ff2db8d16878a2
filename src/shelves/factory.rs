use crate::core::domain::Configuration;
use crate::core::repository::{KeyValueStore, RepositoryStore};
use crate::shelves::repository::file_store::FileStore;
use crate::shelves::repository::memory_store::MemoryStore;
use crate::shelves::repository::ShelfStore;

pub fn create_key_value_store(store: &RepositoryStore) -> Box<dyn KeyValueStore> {
    match store {
        RepositoryStore::InMemory => {
            Box::new(MemoryStore::new())
        }
        RepositoryStore::LocalFile(dir) => {
            Box::new(FileStore::new(dir))
        }
    }
}

pub fn create_shelf_store(config: &Configuration, store: &RepositoryStore) -> ShelfStore {
    ShelfStore::new(config, create_key_value_store(store))
}
