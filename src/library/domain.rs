pub mod service;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::CatalogRecord;
use crate::core::domain::User;
use crate::core::library::{LibraryResult, Shelf};
use crate::shelves::domain::Shelves;
use crate::sync::sorting::SortCriteria;

// SyncOutcome reports what a pull from the remote store did to the local library
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    // no user is signed in, nothing was attempted
    LocalOnly,
    // the remote library is empty, local shelves are kept
    EmptySnapshot,
    // local shelves were overwritten; `discarded` counts local books that
    // never reached the remote store and are now gone
    Replaced { books: usize, discarded: usize },
    // the pull failed and local shelves are untouched
    Degraded { reason: String },
}

// LibraryService is the query/mutation surface presentation layers use.
// Local state is always committed before any remote call, and remote
// failures never fail the call; they show up as sync status and notifications.
#[async_trait]
pub trait LibraryService: Sync + Send {
    // None when the catalog id is already on a shelf
    async fn add_book(&self, record: &CatalogRecord, shelf: Shelf) -> LibraryResult<Option<BookEntity>>;
    // false when the catalog id is on no shelf
    async fn remove_book(&self, catalog_id: &str) -> LibraryResult<bool>;
    fn find_book(&self, catalog_id: &str) -> bool;
    fn get_book(&self, catalog_id: &str) -> Option<BookEntity>;
    fn sort_library(&self, criteria: SortCriteria) -> LibraryResult<()>;
    async fn sync_with_backend(&self) -> LibraryResult<SyncOutcome>;
    async fn update_progress(&self, catalog_id: &str, progress: u8) -> LibraryResult<BookEntity>;
    fn library(&self) -> Shelves;
    fn export_library(&self) -> LibraryResult<String>;
    fn user(&self) -> Option<User>;
    fn sign_in(&self, user: User) -> LibraryResult<()>;
    fn sign_out(&self) -> LibraryResult<()>;
}
