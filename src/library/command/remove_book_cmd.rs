use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct RemoveBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl RemoveBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub catalog_id: String,
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub removed: bool,
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.library_service.remove_book(req.catalog_id.as_str()).await
            .map_err(CommandError::from)
            .map(|removed| RemoveBookCommandResponse { removed })
    }
}
