use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::library::domain::LibraryService;
use crate::library::domain::service::LibraryManager;
use crate::remote::factory::create_sync_client;
use crate::shelves::factory::create_shelf_store;

pub fn create_library_service(config: &Configuration, store: &RepositoryStore,
                              via: GatewayPublisherVia) -> LibraryResult<Arc<dyn LibraryService>> {
    let shelf_store = create_shelf_store(config, store);
    let remote = create_sync_client(config)?;
    let publisher = create_publisher(via);
    Ok(Arc::new(LibraryManager::new(shelf_store, remote, publisher)?))
}
