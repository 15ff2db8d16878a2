use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Notify;
use crate::core::domain::{Configuration, RecordId, User};
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::channel::publisher::ChannelPublisher;
use crate::library::domain::LibraryService;
use crate::library::domain::service::LibraryManager;
use crate::remote::domain::RemoteSyncClient;
use crate::remote::dto::{CreateItemRequest, RemoteItem};
use crate::shelves::repository::memory_store::MemoryStore;
use crate::shelves::repository::ShelfStore;

// FakeRemote scripts the remote store for manager tests. Clones share state so a
// test keeps a handle after moving one into the manager.
#[derive(Clone, Default)]
pub(crate) struct FakeRemote {
    snapshot: Arc<Mutex<Vec<RemoteItem>>>,
    created: Arc<Mutex<Vec<CreateItemRequest>>>,
    deleted: Arc<Mutex<Vec<RecordId>>>,
    fail_list: Arc<AtomicBool>,
    fail_create: Arc<AtomicBool>,
    fail_delete: Arc<AtomicBool>,
    list_calls: Arc<AtomicUsize>,
    next_id: Arc<AtomicI64>,
    create_gates: Arc<Mutex<VecDeque<Arc<Notify>>>>,
}

impl FakeRemote {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Arc::new(AtomicI64::new(100)),
            ..Self::default()
        }
    }

    pub(crate) fn set_snapshot(&self, items: Vec<RemoteItem>) {
        *self.snapshot.lock().unwrap() = items;
    }

    pub(crate) fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    // Each gate holds back one create_item call, in call order. Calls past the
    // queued gates answer right away.
    pub(crate) fn gate_create(&self, gate: Arc<Notify>) {
        self.create_gates.lock().unwrap().push_back(gate);
    }

    // successful and failed create attempts alike
    pub(crate) fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub(crate) fn created(&self) -> Vec<CreateItemRequest> {
        self.created.lock().unwrap().clone()
    }

    pub(crate) fn deleted(&self) -> Vec<RecordId> {
        self.deleted.lock().unwrap().clone()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSyncClient for FakeRemote {
    async fn list_library(&self, _user_id: &RecordId) -> LibraryResult<Vec<RemoteItem>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(LibraryError::network("connection refused", true));
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn create_item(&self, payload: &CreateItemRequest) -> LibraryResult<RemoteItem> {
        self.created.lock().unwrap().push(payload.clone());
        let gate = self.create_gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(LibraryError::remote_rejected("create failed", 500));
        }
        Ok(RemoteItem {
            id: RecordId::Number(self.next_id.fetch_add(1, Ordering::SeqCst)),
            catalog_id: Some(payload.catalog_id.to_string()),
            title: Some(payload.title.to_string()),
            authors: Some(payload.authors.to_string()),
            thumbnail: Some(payload.thumbnail.to_string()),
            shelf_type: Some(payload.shelf_type.to_string()),
            created_at: Some(Utc::now().to_rfc3339()),
        })
    }

    async fn delete_item(&self, remote_id: &RecordId) -> LibraryResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(LibraryError::network("connection reset", true));
        }
        self.deleted.lock().unwrap().push(remote_id.clone());
        Ok(())
    }
}

pub(crate) fn remote_item(id: i64, catalog_id: &str, shelf_type: &str) -> RemoteItem {
    RemoteItem {
        id: RecordId::Number(id),
        catalog_id: Some(catalog_id.to_string()),
        title: Some(catalog_id.to_string()),
        authors: None,
        thumbnail: None,
        shelf_type: Some(shelf_type.to_string()),
        created_at: None,
    }
}

// Builds a manager over an in-memory store, optionally signed in. The returned
// ShelfStore reads the same values the manager persists.
pub(crate) fn manager_with(remote: FakeRemote, user: Option<User>)
                           -> (LibraryManager, ShelfStore, UnboundedReceiver<DomainEvent>) {
    let config = Configuration::default();
    let values = MemoryStore::new();
    let observer = ShelfStore::new(&config, Box::new(values.clone()));
    if let Some(user) = user {
        observer.save_user(&user).expect("should save user");
    }
    let (publisher, receiver) = ChannelPublisher::channel();
    let manager = LibraryManager::new(
        ShelfStore::new(&config, Box::new(values)), Box::new(remote), Box::new(publisher))
        .expect("should create manager");
    (manager, observer, receiver)
}

pub(crate) fn drain_events(receiver: &mut UnboundedReceiver<DomainEvent>) -> Vec<DomainEventType> {
    let mut kinds = vec![];
    while let Ok(event) = receiver.try_recv() {
        kinds.push(event.kind);
    }
    kinds
}

// Service handle for command tests; events go nowhere.
pub(crate) fn service_with(remote: FakeRemote, user: Option<User>) -> Arc<dyn LibraryService> {
    let (manager, _store, _events) = manager_with(remote, user);
    Arc::new(manager)
}
