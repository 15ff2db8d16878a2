use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct FindBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl FindBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBookCommandRequest {
    pub catalog_id: String,
}

#[derive(Debug, Serialize)]
pub struct FindBookCommandResponse {
    pub found: bool,
    pub book: Option<BookEntity>,
}

#[async_trait]
impl Command<FindBookCommandRequest, FindBookCommandResponse> for FindBookCommand {
    async fn execute(&self, req: FindBookCommandRequest) -> Result<FindBookCommandResponse, CommandError> {
        let book = self.library_service.get_book(req.catalog_id.as_str());
        Ok(FindBookCommandResponse {
            found: self.library_service.find_book(req.catalog_id.as_str()),
            book,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::CatalogRecord;
    use crate::core::command::Command;
    use crate::core::library::Shelf;
    use crate::library::command::find_book_cmd::{FindBookCommand, FindBookCommandRequest};
    use crate::testing::{service_with, FakeRemote};

    #[tokio::test]
    async fn test_should_run_find_book() {
        let svc = service_with(FakeRemote::new(), None);
        svc.add_book(&CatalogRecord::new("vol1", "Piranesi"), Shelf::Current).await.expect("should add book");
        let cmd = FindBookCommand::new(svc);

        let res = cmd.execute(FindBookCommandRequest { catalog_id: "vol1".to_string() }).await.expect("should find");
        assert!(res.found);
        assert_eq!(Some("Piranesi".to_string()), res.book.map(|b| b.title));

        let res = cmd.execute(FindBookCommandRequest { catalog_id: "vol2".to_string() }).await.expect("should find");
        assert!(!res.found);
        assert!(res.book.is_none());
    }
}
