use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::Shelf;

// Shelves is the reader's library: three ordered shelves where a catalog id
// appears on at most one shelf. Only the manager enforces that across
// mutations; this type keeps the lookups honest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shelves {
    #[serde(default)]
    pub current: Vec<BookEntity>,
    #[serde(default)]
    pub want: Vec<BookEntity>,
    #[serde(default)]
    pub finished: Vec<BookEntity>,
}

impl Shelves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shelf(&self, shelf: Shelf) -> &[BookEntity] {
        match shelf {
            Shelf::Current => &self.current,
            Shelf::Want => &self.want,
            Shelf::Finished => &self.finished,
        }
    }

    pub fn shelf_mut(&mut self, shelf: Shelf) -> &mut Vec<BookEntity> {
        match shelf {
            Shelf::Current => &mut self.current,
            Shelf::Want => &mut self.want,
            Shelf::Finished => &mut self.finished,
        }
    }

    // finds the shelf and position holding a catalog id
    pub fn locate(&self, catalog_id: &str) -> Option<(Shelf, usize)> {
        Shelf::ALL.into_iter().find_map(|shelf| {
            self.shelf(shelf).iter()
                .position(|b| b.id() == catalog_id)
                .map(|pos| (shelf, pos))
        })
    }

    pub fn contains(&self, catalog_id: &str) -> bool {
        self.locate(catalog_id).is_some()
    }

    pub fn get(&self, catalog_id: &str) -> Option<&BookEntity> {
        self.locate(catalog_id).map(|(shelf, pos)| &self.shelf(shelf)[pos])
    }

    pub fn get_mut(&mut self, catalog_id: &str) -> Option<&mut BookEntity> {
        let (shelf, pos) = self.locate(catalog_id)?;
        self.shelf_mut(shelf).get_mut(pos)
    }

    // appends to the shelf named by the book itself
    pub fn push(&mut self, book: BookEntity) {
        self.shelf_mut(book.shelf).push(book);
    }

    pub fn remove(&mut self, catalog_id: &str) -> Option<BookEntity> {
        let (shelf, pos) = self.locate(catalog_id)?;
        Some(self.shelf_mut(shelf).remove(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookEntity> {
        self.current.iter().chain(self.want.iter()).chain(self.finished.iter())
    }

    pub fn len(&self) -> usize {
        self.current.len() + self.want.len() + self.finished.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // see BookEntity::settle; also drops repeated catalog ids, keeping the first occurrence
    pub fn settle(&mut self) -> usize {
        let mut seen = std::collections::HashSet::new();
        let mut dropped = 0;
        for shelf in Shelf::ALL {
            let books = self.shelf_mut(shelf);
            let before = books.len();
            books.retain(|b| seen.insert(b.catalog_id.clone()));
            dropped += before - books.len();
            for book in books.iter_mut() {
                book.settle(shelf);
            }
        }
        dropped
    }
}
