use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct UpdateProgressCommand {
    library_service: Arc<dyn LibraryService>,
}

impl UpdateProgressCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProgressCommandRequest {
    pub catalog_id: String,
    pub progress: u8,
}

#[derive(Debug, Serialize)]
pub struct UpdateProgressCommandResponse {
    pub book: BookEntity,
}

#[async_trait]
impl Command<UpdateProgressCommandRequest, UpdateProgressCommandResponse> for UpdateProgressCommand {
    async fn execute(&self, req: UpdateProgressCommandRequest) -> Result<UpdateProgressCommandResponse, CommandError> {
        self.library_service.update_progress(req.catalog_id.as_str(), req.progress).await
            .map_err(CommandError::from)
            .map(|book| UpdateProgressCommandResponse { book })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::CatalogRecord;
    use crate::core::command::{Command, CommandError};
    use crate::core::library::Shelf;
    use crate::library::command::update_progress_cmd::{UpdateProgressCommand, UpdateProgressCommandRequest};
    use crate::testing::{service_with, FakeRemote};

    #[tokio::test]
    async fn test_should_run_update_progress() {
        let svc = service_with(FakeRemote::new(), None);
        svc.add_book(&CatalogRecord::new("vol1", "Piranesi"), Shelf::Current).await.expect("should add book");
        let cmd = UpdateProgressCommand::new(svc);

        let res = cmd.execute(UpdateProgressCommandRequest { catalog_id: "vol1".to_string(), progress: 75 })
            .await.expect("should update");
        assert_eq!(Some(75), res.book.progress);

        let err = cmd.execute(UpdateProgressCommandRequest { catalog_id: "vol2".to_string(), progress: 5 })
            .await.expect_err("should not find");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
