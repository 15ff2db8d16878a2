use crate::gateway::channel::publisher::ChannelPublisher;
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::GatewayPublisherVia;

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new())
        }
        GatewayPublisherVia::Channel(sender) => {
            Box::new(ChannelPublisher::new(sender))
        }
    }
}
