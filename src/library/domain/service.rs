use std::sync::{Mutex, MutexGuard, RwLock};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::CatalogRecord;
use crate::core::domain::User;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, Shelf};
use crate::gateway::events::EventPublisher;
use crate::library::domain::{LibraryService, SyncOutcome};
use crate::remote::domain::RemoteSyncClient;
use crate::remote::dto::CreateItemRequest;
use crate::shelves::domain::Shelves;
use crate::shelves::repository::ShelfStore;
use crate::sync::policy::map_remote_snapshot;
use crate::sync::sorting::{sort_shelves, SortCriteria};

pub(crate) struct LibraryManager {
    store: ShelfStore,
    remote: Box<dyn RemoteSyncClient>,
    events_publisher: Box<dyn EventPublisher>,
    shelves: Mutex<Shelves>,
    user: RwLock<Option<User>>,
    sort_criteria: Mutex<Option<SortCriteria>>,
}

impl LibraryManager {
    pub(crate) fn new(store: ShelfStore, remote: Box<dyn RemoteSyncClient>,
                      events_publisher: Box<dyn EventPublisher>) -> LibraryResult<Self> {
        let mut shelves = store.load()?;
        let dropped = shelves.settle();
        if dropped > 0 {
            warn!("dropped {} duplicate books while loading the library", dropped);
        }
        let user = store.load_user();
        debug!("loaded {} books, signed in: {}", shelves.len(), user.is_some());
        Ok(Self {
            store,
            remote,
            events_publisher,
            shelves: Mutex::new(shelves),
            user: RwLock::new(user),
            sort_criteria: Mutex::new(None),
        })
    }

    fn shelves(&self) -> MutexGuard<'_, Shelves> {
        self.shelves.lock().unwrap_or_else(|err| err.into_inner())
    }

    fn current_user(&self) -> Option<User> {
        self.user.read().unwrap_or_else(|err| err.into_inner()).clone()
    }

    fn last_sort(&self) -> Option<SortCriteria> {
        *self.sort_criteria.lock().unwrap_or_else(|err| err.into_inner())
    }

    // Applies a reader mutation to a working copy and swaps it in only once it
    // is persisted, so a failed save leaves the library as it was.
    fn commit<T>(&self, mutate: impl FnOnce(&mut Shelves) -> LibraryResult<T>) -> LibraryResult<T> {
        let mut shelves = self.shelves();
        let mut next = shelves.clone();
        let res = mutate(&mut next)?;
        self.store.save(&next).map_err(|err| {
            error!("failed to persist library, change discarded: {}", err);
            err
        })?;
        *shelves = next;
        Ok(res)
    }

    // Applies a sync pipeline result in place. The remote store already holds
    // the change, so it is kept in memory even when it cannot be persisted.
    fn record<T>(&self, mutate: impl FnOnce(&mut Shelves) -> T) -> T {
        let mut shelves = self.shelves();
        let res = mutate(&mut shelves);
        if let Err(err) = self.store.save(&shelves) {
            error!("failed to persist sync result: {}", err);
        }
        res
    }

    async fn notify(&self, event: serde_json::Result<DomainEvent>) {
        match event {
            Ok(event) => {
                if let Err(err) = self.events_publisher.publish(&event).await {
                    warn!("failed to publish {:?} for {}: {}", event.kind, event.key, err);
                }
            }
            Err(err) => warn!("failed to build event: {:?}", err),
        }
    }

    // Creates the remote copy of a book already committed locally. Returns the
    // book as it stands afterwards, or None when it left the library while the
    // call was in flight. A book removed and added again meanwhile is a new
    // entry with its own date_added and is left alone.
    async fn push_remote_copy(&self, user: &User, catalog_id: &str) -> Option<BookEntity> {
        let (payload, added_at) = {
            let mut shelves = self.shelves();
            let book = shelves.get_mut(catalog_id)?;
            book.mark_syncing();
            (CreateItemRequest::new(user, book), book.date_added)
        };

        match self.remote.create_item(&payload).await {
            Ok(item) => {
                let synced = self.record(|shelves| {
                    same_entry(shelves, catalog_id, added_at).map(|book| {
                        if !book.attach_remote_id(item.id.clone()) {
                            warn!("{} already has remote id {:?}, ignoring {}", catalog_id, book.remote_id, item.id);
                        }
                        book.clone()
                    })
                });
                match synced {
                    Some(book) => {
                        info!("synced {} as remote item {}", catalog_id, item.id);
                        self.notify(DomainEvent::synced(catalog_id, "saved", &book)).await;
                        Some(book)
                    }
                    None => {
                        warn!("remote item {} was created for {} after it left the library", item.id, catalog_id);
                        None
                    }
                }
            }
            Err(err) => {
                warn!("failed to create remote copy of {}: {}", catalog_id, err);
                let failed = self.record(|shelves| {
                    same_entry(shelves, catalog_id, added_at).map(|book| {
                        book.mark_sync_failed();
                        book.clone()
                    })
                });
                self.notify(DomainEvent::sync_failed(catalog_id, "saved locally (sync failed)", &catalog_id)
                    .map(|event| event.with_metadata("reason", err.to_string().as_str()))).await;
                failed
            }
        }
    }
}

fn same_entry<'a>(shelves: &'a mut Shelves, catalog_id: &str,
                  added_at: Option<DateTime<Utc>>) -> Option<&'a mut BookEntity> {
    shelves.get_mut(catalog_id).filter(|book| book.date_added == added_at)
}

#[async_trait]
impl LibraryService for LibraryManager {
    async fn add_book(&self, record: &CatalogRecord, shelf: Shelf) -> LibraryResult<Option<BookEntity>> {
        if record.id.trim().is_empty() {
            return Err(LibraryError::validation("catalog record has no id", Some("catalog_id".to_string())));
        }
        let book = record.build_book(shelf);
        let added = self.commit(|shelves| {
            if shelves.contains(book.catalog_id.as_str()) {
                return Ok(false);
            }
            shelves.push(book.clone());
            Ok(true)
        })?;
        if !added {
            debug!("{} is already on a shelf", record.id);
            return Ok(None);
        }
        info!("added {} to {}", record.id, shelf);
        self.notify(DomainEvent::added(record.id.as_str(), format!("added to {}", shelf).as_str(), &book)
            .map(|event| event.with_metadata("shelf", shelf.to_string().as_str()))).await;

        match self.current_user() {
            Some(user) => Ok(Some(self.push_remote_copy(&user, record.id.as_str()).await.unwrap_or(book))),
            None => Ok(Some(book)),
        }
    }

    async fn remove_book(&self, catalog_id: &str) -> LibraryResult<bool> {
        let book = match self.commit(|shelves| Ok(shelves.remove(catalog_id)))? {
            Some(book) => book,
            None => return Ok(false),
        };
        info!("removed {} from {}", catalog_id, book.shelf);
        self.notify(DomainEvent::removed(catalog_id, "removed", &book)).await;

        match (self.current_user(), book.remote_id.as_ref()) {
            (Some(_), Some(remote_id)) => {
                if let Err(err) = self.remote.delete_item(remote_id).await {
                    warn!("failed to delete remote item {} for {}: {}", remote_id, catalog_id, err);
                    self.notify(DomainEvent::sync_failed(catalog_id, "removed locally (sync failed)", &book)
                        .map(|event| event.with_metadata("reason", err.to_string().as_str()))).await;
                }
            }
            (Some(_), None) => {
                let gap = LibraryError::consistency_gap(
                    format!("{} has no remote id, any remote copy is kept", catalog_id).as_str());
                warn!("{}", gap);
                self.notify(DomainEvent::consistency_gap(catalog_id, "removed locally only", &book)).await;
            }
            (None, _) => {}
        }
        Ok(true)
    }

    fn find_book(&self, catalog_id: &str) -> bool {
        self.shelves().contains(catalog_id)
    }

    fn get_book(&self, catalog_id: &str) -> Option<BookEntity> {
        self.shelves().get(catalog_id).cloned()
    }

    fn sort_library(&self, criteria: SortCriteria) -> LibraryResult<()> {
        self.commit(|shelves| {
            sort_shelves(shelves, criteria);
            Ok(())
        })?;
        *self.sort_criteria.lock().unwrap_or_else(|err| err.into_inner()) = Some(criteria);
        debug!("sorted library by {}", criteria);
        Ok(())
    }

    async fn sync_with_backend(&self) -> LibraryResult<SyncOutcome> {
        let user = match self.current_user() {
            Some(user) => user,
            None => return Ok(SyncOutcome::LocalOnly),
        };
        let items = match self.remote.list_library(&user.id).await {
            Ok(items) => items,
            Err(err) => {
                warn!("sync with backend failed, keeping local library: {}", err);
                self.notify(DomainEvent::sync_failed(user.id.to_string().as_str(), "sync failed, using local library", &user.id)
                    .map(|event| event.with_metadata("reason", err.to_string().as_str()))).await;
                return Ok(SyncOutcome::Degraded { reason: err.to_string() });
            }
        };
        if items.is_empty() {
            debug!("remote library for {} is empty, keeping local library", user.id);
            return Ok(SyncOutcome::EmptySnapshot);
        }

        let mut snapshot = map_remote_snapshot(&items);
        if let Some(criteria) = self.last_sort() {
            sort_shelves(&mut snapshot, criteria);
        }
        let books = snapshot.len();
        let discarded = self.commit(move |shelves| {
            let discarded = shelves.iter().filter(|book| book.remote_id.is_none()).count();
            *shelves = snapshot;
            Ok(discarded)
        })?;
        if discarded > 0 {
            warn!("remote snapshot replaced {} local-only books", discarded);
        }
        info!("replaced library with {} remote books", books);
        self.notify(DomainEvent::replaced(user.id.to_string().as_str(), "library synced", &books)
            .map(|event| event.with_metadata("discarded", discarded.to_string().as_str()))).await;
        Ok(SyncOutcome::Replaced { books, discarded })
    }

    async fn update_progress(&self, catalog_id: &str, progress: u8) -> LibraryResult<BookEntity> {
        if progress > 100 {
            return Err(LibraryError::validation(
                format!("progress {} is not a percentage", progress).as_str(), Some("progress".to_string())));
        }
        let book = self.commit(|shelves| {
            let book = shelves.get_mut(catalog_id).ok_or_else(|| {
                LibraryError::not_found(format!("{} is on no shelf", catalog_id).as_str())
            })?;
            if book.shelf != Shelf::Current {
                return Err(LibraryError::validation(
                    format!("{} is on {}, progress is tracked for current only", catalog_id, book.shelf).as_str(),
                    Some("shelf".to_string())));
            }
            book.progress = Some(progress);
            Ok(book.clone())
        })?;
        self.notify(DomainEvent::updated(catalog_id, format!("progress {}%", progress).as_str(), &book)).await;

        if let Some(user) = self.current_user() {
            if book.needs_remote_copy() {
                debug!("retrying remote copy of {} ({})", catalog_id, book.sync_status);
                if let Some(synced) = self.push_remote_copy(&user, catalog_id).await {
                    return Ok(synced);
                }
            }
        }
        Ok(book)
    }

    fn library(&self) -> Shelves {
        self.shelves().clone()
    }

    fn export_library(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string_pretty(&self.library())?)
    }

    fn user(&self) -> Option<User> {
        self.current_user()
    }

    fn sign_in(&self, user: User) -> LibraryResult<()> {
        self.store.save_user(&user)?;
        info!("signed in as {}", user.id);
        *self.user.write().unwrap_or_else(|err| err.into_inner()) = Some(user);
        Ok(())
    }

    fn sign_out(&self) -> LibraryResult<()> {
        self.store.clear_user()?;
        info!("signed out, continuing in local-only mode");
        *self.user.write().unwrap_or_else(|err| err.into_inner()) = None;
        Ok(())
    }
}
