use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::CatalogRecord;
use crate::core::command::{Command, CommandError};
use crate::core::library::Shelf;
use crate::library::domain::LibraryService;

pub struct AddBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl AddBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub record: CatalogRecord,
    pub shelf: Shelf,
}

impl AddBookCommandRequest {
    pub fn new(record: CatalogRecord, shelf: Shelf) -> Self {
        Self {
            record,
            shelf,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub added: bool,
    pub book: Option<BookEntity>,
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = self.library_service.add_book(&req.record, req.shelf).await.map_err(CommandError::from)?;
        match book {
            Some(book) => Ok(AddBookCommandResponse { added: true, book: Some(book) }),
            None => Ok(AddBookCommandResponse {
                added: false,
                book: self.library_service.get_book(req.record.id.as_str()),
            }),
        }
    }
}
