use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::{Identifiable, RecordId};
use crate::core::library::{Shelf, SyncStatus};
use crate::utils::date::serializer;

// BookEntity is a catalog entry tracked on one of the reader's shelves.
// `date_added` is set once at creation and `remote_id` is never reassigned
// once the remote store has issued one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub catalog_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<RecordId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default = "default_shelf")]
    pub shelf: Shelf,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default, with = "serializer")]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sync_status: SyncStatus,
}

fn default_shelf() -> Shelf {
    Shelf::Want
}

impl BookEntity {
    pub fn new(catalog_id: &str, title: &str, authors: &[String], thumbnail: &str, shelf: Shelf) -> Self {
        Self {
            catalog_id: catalog_id.to_string(),
            remote_id: None,
            title: title.to_string(),
            authors: authors.to_vec(),
            thumbnail: thumbnail.to_string(),
            shelf,
            progress: initial_progress(shelf),
            date_added: Some(Utc::now()),
            sync_status: SyncStatus::LocalOnly,
        }
    }

    // Records the id issued by the remote store. An id that differs from one
    // already attached is refused and the book keeps its original id.
    pub fn attach_remote_id(&mut self, id: RecordId) -> bool {
        match &self.remote_id {
            Some(existing) if *existing != id => false,
            _ => {
                self.remote_id = Some(id);
                self.sync_status = SyncStatus::Synced;
                true
            }
        }
    }

    pub fn mark_syncing(&mut self) {
        self.sync_status = SyncStatus::Syncing;
    }

    pub fn mark_sync_failed(&mut self) {
        self.sync_status = SyncStatus::SyncFailed;
    }

    // true when the remote store has no confirmed copy and a create should be attempted
    pub fn needs_remote_copy(&self) -> bool {
        self.remote_id.is_none() && self.sync_status != SyncStatus::Syncing
    }

    // Brings a book read back from storage into a consistent state: it belongs
    // to the shelf holding it, and an in-flight status from an interrupted run
    // becomes whatever the remote id proves.
    pub fn settle(&mut self, shelf: Shelf) {
        self.shelf = shelf;
        if shelf != Shelf::Current {
            self.progress = None;
        } else if self.progress.is_none() {
            self.progress = Some(0);
        }
        if self.sync_status == SyncStatus::Syncing {
            self.sync_status = if self.remote_id.is_some() {
                SyncStatus::Synced
            } else {
                SyncStatus::LocalOnly
            };
        }
    }
}

pub(crate) fn initial_progress(shelf: Shelf) -> Option<u8> {
    if shelf == Shelf::Current { Some(0) } else { None }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.catalog_id.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        self.date_added
    }

    fn shelf(&self) -> Shelf {
        self.shelf
    }

    fn remote_id(&self) -> Option<&RecordId> {
        self.remote_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::RecordId;
    use crate::core::library::{Shelf, SyncStatus};

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("vol1", "Piranesi", &["Susanna Clarke".to_string()], "", Shelf::Current);
        assert_eq!("vol1", book.catalog_id.as_str());
        assert_eq!(Some(0), book.progress);
        assert_eq!(SyncStatus::LocalOnly, book.sync_status);
        assert_eq!(Some("Susanna Clarke"), book.first_author());
        assert!(book.date_added.is_some());

        let book = BookEntity::new("vol2", "Circe", &[], "", Shelf::Want);
        assert_eq!(None, book.progress);
        assert_eq!(None, book.first_author());
    }

    #[tokio::test]
    async fn test_should_never_reassign_remote_id() {
        let mut book = BookEntity::new("vol1", "Piranesi", &[], "", Shelf::Want);
        assert!(book.attach_remote_id(RecordId::Number(4)));
        assert_eq!(SyncStatus::Synced, book.sync_status);
        assert!(book.attach_remote_id(RecordId::Number(4)));
        assert!(!book.attach_remote_id(RecordId::Number(5)));
        assert_eq!(Some(&RecordId::Number(4)), book.remote_id());
    }

    #[tokio::test]
    async fn test_should_settle_interrupted_sync() {
        let mut book = BookEntity::new("vol1", "Piranesi", &[], "", Shelf::Want);
        book.mark_syncing();
        assert!(!book.needs_remote_copy());
        book.settle(Shelf::Current);
        assert_eq!(SyncStatus::LocalOnly, book.sync_status);
        assert_eq!(Shelf::Current, book.shelf);
        assert_eq!(Some(0), book.progress);

        let mut book = BookEntity::new("vol2", "Circe", &[], "", Shelf::Current);
        book.remote_id = Some(RecordId::Number(9));
        book.mark_syncing();
        book.settle(Shelf::Finished);
        assert_eq!(SyncStatus::Synced, book.sync_status);
        assert_eq!(None, book.progress);
    }

    #[tokio::test]
    async fn test_should_read_sparse_books() {
        let book: BookEntity = serde_json::from_str(r#"{"catalog_id": "vol1", "date_added": "not a date"}"#)
            .expect("should parse book");
        assert_eq!("vol1", book.catalog_id.as_str());
        assert_eq!(None, book.date_added);
        assert_eq!(SyncStatus::LocalOnly, book.sync_status);
        assert!(book.authors.is_empty());
    }
}
