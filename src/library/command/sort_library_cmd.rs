use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;
use crate::shelves::domain::Shelves;
use crate::sync::sorting::SortCriteria;

pub struct SortLibraryCommand {
    library_service: Arc<dyn LibraryService>,
}

impl SortLibraryCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SortLibraryCommandRequest {
    pub criteria: SortCriteria,
}

#[derive(Debug, Serialize)]
pub struct SortLibraryCommandResponse {
    pub criteria: SortCriteria,
    pub library: Shelves,
}

#[async_trait]
impl Command<SortLibraryCommandRequest, SortLibraryCommandResponse> for SortLibraryCommand {
    async fn execute(&self, req: SortLibraryCommandRequest) -> Result<SortLibraryCommandResponse, CommandError> {
        self.library_service.sort_library(req.criteria).map_err(CommandError::from)?;
        Ok(SortLibraryCommandResponse {
            criteria: req.criteria,
            library: self.library_service.library(),
        })
    }
}
