use tokio::sync::mpsc::UnboundedSender;
use crate::core::events::DomainEvent;

pub mod channel;
pub mod events;
pub mod factory;
pub mod logs;

#[derive(Debug, Clone)]
pub enum GatewayPublisherVia {
    Logs,
    Channel(UnboundedSender<DomainEvent>),
}
