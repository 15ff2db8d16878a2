use chrono::{DateTime, Utc};
use crate::core::domain::{Identifiable, RecordId};
use crate::core::library::Shelf;

pub mod model;

// Book is what shelves hold and what sorting compares; the catalog id from
// Identifiable is the collection-wide membership key.
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn first_author(&self) -> Option<&str>;
    fn date_added(&self) -> Option<DateTime<Utc>>;
    fn shelf(&self) -> Shelf;
    fn remote_id(&self) -> Option<&RecordId>;
}
