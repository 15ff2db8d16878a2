use async_trait::async_trait;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// ChannelPublisher hands events to a subscriber without ever waiting on it.
#[derive(Debug, Clone)]
pub struct ChannelPublisher {
    sender: UnboundedSender<DomainEvent>,
}

impl ChannelPublisher {
    pub fn new(sender: UnboundedSender<DomainEvent>) -> Self {
        Self {
            sender,
        }
    }

    pub fn channel() -> (Self, UnboundedReceiver<DomainEvent>) {
        let (sender, receiver) = unbounded_channel();
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl EventPublisher for ChannelPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.sender.send(event.clone()).map_err(|err| {
            LibraryError::runtime(format!("no subscriber for {:?} event {}", err.0.kind, err.0.key).as_str(), None)
        })
    }
}
