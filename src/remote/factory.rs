use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::remote::domain::RemoteSyncClient;
use crate::remote::http_client::HttpSyncClient;

pub fn create_sync_client(config: &Configuration) -> LibraryResult<Box<dyn RemoteSyncClient>> {
    Ok(Box::new(HttpSyncClient::new(config)?))
}
