use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct ExportLibraryCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ExportLibraryCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportLibraryCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ExportLibraryCommandResponse {
    pub exported: String,
}

#[async_trait]
impl Command<ExportLibraryCommandRequest, ExportLibraryCommandResponse> for ExportLibraryCommand {
    async fn execute(&self, _req: ExportLibraryCommandRequest) -> Result<ExportLibraryCommandResponse, CommandError> {
        self.library_service.export_library()
            .map_err(CommandError::from)
            .map(|exported| ExportLibraryCommandResponse { exported })
    }
}
