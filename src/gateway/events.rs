use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

// EventPublisher delivers notifications to whoever presents them to the reader.
// Callers treat publishing as fire-and-forget.
#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}
