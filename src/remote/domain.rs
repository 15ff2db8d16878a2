use async_trait::async_trait;
use crate::core::domain::RecordId;
use crate::core::library::LibraryResult;
use crate::remote::dto::{CreateItemRequest, RemoteItem};

// RemoteSyncClient wraps the remote library operations. Each call is a single
// round trip with no retries; transport failures come back as Network errors and
// non-success statuses as RemoteRejected.
#[async_trait]
pub trait RemoteSyncClient: Sync + Send {
    async fn list_library(&self, user_id: &RecordId) -> LibraryResult<Vec<RemoteItem>>;
    async fn create_item(&self, payload: &CreateItemRequest) -> LibraryResult<RemoteItem>;
    async fn delete_item(&self, remote_id: &RecordId) -> LibraryResult<()>;
}
