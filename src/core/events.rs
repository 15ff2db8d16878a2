use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// DomainEventType defines type of event for shelf changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Removed,
    Updated,
    Synced,
    SyncFailed,
    Replaced,
    ConsistencyGap,
}

impl DomainEventType {
    // degraded outcomes are surfaced to the reader as warnings
    pub fn is_degraded(&self) -> bool {
        matches!(self, DomainEventType::SyncFailed | DomainEventType::ConsistencyGap)
    }
}

// DomainEvent abstracts a user-visible notification about library changes
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub key: String,
    pub kind: DomainEventType,
    pub message: String,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn added<T: Serialize>(key: &str, message: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(key, DomainEventType::Added, message, data)
    }

    pub fn removed<T: Serialize>(key: &str, message: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(key, DomainEventType::Removed, message, data)
    }

    pub fn updated<T: Serialize>(key: &str, message: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(key, DomainEventType::Updated, message, data)
    }

    pub fn synced<T: Serialize>(key: &str, message: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(key, DomainEventType::Synced, message, data)
    }

    pub fn sync_failed<T: Serialize>(key: &str, message: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(key, DomainEventType::SyncFailed, message, data)
    }

    pub fn replaced<T: Serialize>(key: &str, message: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(key, DomainEventType::Replaced, message, data)
    }

    pub fn consistency_gap<T: Serialize>(key: &str, message: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(key, DomainEventType::ConsistencyGap, message, data)
    }

    pub fn with_metadata(mut self, name: &str, value: &str) -> Self {
        self.metadata.insert(name.to_string(), value.to_string());
        self
    }

    fn build<T: Serialize>(key: &str, kind: DomainEventType, message: &str, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(data)?;
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: "books".to_string(),
            key: key.to_string(),
            kind,
            message: message.to_string(),
            metadata: HashMap::new(),
            json_data: json,
            created_at: Utc::now(),
        })
    }
}
