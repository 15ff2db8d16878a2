use async_trait::async_trait;
use tracing::{info, warn};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        if event.kind.is_degraded() {
            warn!("{:?} {}: {}", event.kind, event.key, event.message);
        } else {
            info!("{:?} {}: {}", event.kind, event.key, event.message);
        }
        Ok(())
    }
}
