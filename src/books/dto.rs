use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::Shelf;

// CatalogRecord is a search result handed over by the catalog; it is the input
// for adding a book to a shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl CatalogRecord {
    pub fn new(id: &str, title: &str) -> CatalogRecord {
        CatalogRecord {
            id: id.to_string(),
            title: title.to_string(),
            authors: vec![],
            description: String::new(),
            thumbnail: String::new(),
        }
    }

    pub fn with_authors(mut self, authors: &[&str]) -> CatalogRecord {
        self.authors = authors.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: &str) -> CatalogRecord {
        self.thumbnail = thumbnail.to_string();
        self
    }

    pub fn build_book(&self, shelf: Shelf) -> BookEntity {
        BookEntity::new(self.id.as_str(), self.title.as_str(), &self.authors, self.thumbnail.as_str(), shelf)
    }
}

impl Identifiable for CatalogRecord {
    fn id(&self) -> String {
        self.id.to_string()
    }
}
