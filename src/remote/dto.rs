use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;
use crate::books::domain::model::BookEntity;
use crate::core::domain::{RecordId, User};
use crate::core::library::Shelf;

pub const AUTHORS_SEPARATOR: &str = ", ";

// RemoteItem is one row of the reader's library as the remote store returns it.
// Only the id is required; the sync policy decides what a row missing the rest is worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteItem {
    pub id: RecordId,
    #[serde(default, alias = "google_books_id")]
    pub catalog_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub shelf_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// CreateItemRequest is the body for adding a book to the remote library; the
// store assigns the id and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub user_id: RecordId,
    pub catalog_id: String,
    pub title: String,
    pub authors: String,
    pub thumbnail: String,
    pub shelf_type: Shelf,
}

impl CreateItemRequest {
    pub fn new(user: &User, book: &BookEntity) -> Self {
        Self {
            user_id: user.id.clone(),
            catalog_id: book.catalog_id.to_string(),
            title: book.title.to_string(),
            authors: book.authors.join(AUTHORS_SEPARATOR),
            thumbnail: book.thumbnail.to_string(),
            shelf_type: book.shelf,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLibraryResponse {
    #[serde(default, deserialize_with = "readable_rows")]
    pub library: Vec<RemoteItem>,
}

// A row that does not decode is dropped on its own instead of failing the listing.
fn readable_rows<'de, D>(deserializer: D) -> Result<Vec<RemoteItem>, D::Error>
    where D: Deserializer<'de> {
    let rows = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<RemoteItem>(row.clone()) {
            Ok(item) => Some(item),
            Err(err) => {
                warn!("dropping unreadable remote row {}: {}", row, err);
                None
            }
        })
        .collect())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemResponse {
    pub item: RemoteItem,
}
