use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::command::{Command, CommandError};
use crate::core::library::Shelf;
use crate::library::domain::LibraryService;
use crate::shelves::domain::Shelves;

pub struct ListLibraryCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ListLibraryCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListLibraryCommandRequest {
    // all shelves when absent
    pub shelf: Option<Shelf>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ListLibraryCommandResponse {
    Library(Shelves),
    Shelf(Vec<BookEntity>),
}

#[async_trait]
impl Command<ListLibraryCommandRequest, ListLibraryCommandResponse> for ListLibraryCommand {
    async fn execute(&self, req: ListLibraryCommandRequest) -> Result<ListLibraryCommandResponse, CommandError> {
        let library = self.library_service.library();
        Ok(match req.shelf {
            Some(shelf) => ListLibraryCommandResponse::Shelf(library.shelf(shelf).to_vec()),
            None => ListLibraryCommandResponse::Library(library),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::CatalogRecord;
    use crate::core::command::Command;
    use crate::core::library::Shelf;
    use crate::library::command::list_library_cmd::{ListLibraryCommand, ListLibraryCommandRequest, ListLibraryCommandResponse};
    use crate::testing::{service_with, FakeRemote};

    #[tokio::test]
    async fn test_should_run_list_library() {
        let svc = service_with(FakeRemote::new(), None);
        svc.add_book(&CatalogRecord::new("vol1", "Piranesi"), Shelf::Current).await.expect("should add book");
        svc.add_book(&CatalogRecord::new("vol2", "Circe"), Shelf::Want).await.expect("should add book");
        let cmd = ListLibraryCommand::new(svc);

        match cmd.execute(ListLibraryCommandRequest::default()).await.expect("should list") {
            ListLibraryCommandResponse::Library(library) => assert_eq!(2, library.len()),
            other => panic!("unexpected response {:?}", other),
        }
        match cmd.execute(ListLibraryCommandRequest { shelf: Some(Shelf::Want) }).await.expect("should list") {
            ListLibraryCommandResponse::Shelf(books) => {
                assert_eq!(vec!["vol2".to_string()], books.into_iter().map(|b| b.catalog_id).collect::<Vec<_>>());
            }
            other => panic!("unexpected response {:?}", other),
        }
    }
}
