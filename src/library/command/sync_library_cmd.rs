use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::{LibraryService, SyncOutcome};

pub struct SyncLibraryCommand {
    library_service: Arc<dyn LibraryService>,
}

impl SyncLibraryCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SyncLibraryCommandRequest {}

#[derive(Debug, Serialize)]
pub struct SyncLibraryCommandResponse {
    #[serde(flatten)]
    pub outcome: SyncOutcome,
    pub books: usize,
}

#[async_trait]
impl Command<SyncLibraryCommandRequest, SyncLibraryCommandResponse> for SyncLibraryCommand {
    async fn execute(&self, _req: SyncLibraryCommandRequest) -> Result<SyncLibraryCommandResponse, CommandError> {
        let outcome = self.library_service.sync_with_backend().await.map_err(CommandError::from)?;
        Ok(SyncLibraryCommandResponse {
            outcome,
            books: self.library_service.library().len(),
        })
    }
}
