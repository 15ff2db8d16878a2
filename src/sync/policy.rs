use std::str::FromStr;
use chrono::Utc;
use tracing::warn;
use crate::books::domain::model::{initial_progress, BookEntity};
use crate::core::library::{Shelf, SyncStatus};
use crate::remote::dto::{RemoteItem, AUTHORS_SEPARATOR};
use crate::shelves::domain::Shelves;
use crate::utils::date::parse_timestamp;

// Builds a fresh library from the remote snapshot, keeping the snapshot order
// within each shelf. Rows without a catalog id or with a missing or unknown
// shelf type are dropped; a catalog id repeated in the snapshot keeps only its
// first row.
pub fn map_remote_snapshot(items: &[RemoteItem]) -> Shelves {
    let mut shelves = Shelves::new();
    for item in items {
        let catalog_id = match item.catalog_id.as_deref().filter(|id| !id.trim().is_empty()) {
            Some(catalog_id) => catalog_id,
            None => {
                warn!("dropping remote item {} without a catalog id", item.id);
                continue;
            }
        };
        let shelf = match item.shelf_type.as_deref().map(Shelf::from_str) {
            Some(Ok(shelf)) => shelf,
            _ => {
                warn!("dropping remote item {} with unknown shelf type {:?}", item.id, item.shelf_type);
                continue;
            }
        };
        if shelves.contains(catalog_id) {
            warn!("dropping remote item {}: {} is already on a shelf", item.id, catalog_id);
            continue;
        }
        shelves.push(map_remote_item(item, catalog_id, shelf));
    }
    shelves
}

pub fn map_remote_item(item: &RemoteItem, catalog_id: &str, shelf: Shelf) -> BookEntity {
    BookEntity {
        catalog_id: catalog_id.to_string(),
        remote_id: Some(item.id.clone()),
        title: item.title.clone().unwrap_or_default(),
        authors: split_authors(item.authors.as_deref().unwrap_or("")),
        thumbnail: item.thumbnail.clone().unwrap_or_default(),
        shelf,
        progress: initial_progress(shelf),
        date_added: Some(item.created_at.as_deref().and_then(parse_timestamp).unwrap_or_else(Utc::now)),
        sync_status: SyncStatus::Synced,
    }
}

pub fn split_authors(joined: &str) -> Vec<String> {
    joined.split(AUTHORS_SEPARATOR.trim())
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}
