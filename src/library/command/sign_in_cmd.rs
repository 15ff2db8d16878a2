use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::domain::{RecordId, User};
use crate::library::domain::{LibraryService, SyncOutcome};

// Signs the reader in and pulls their remote library.
pub struct SignInCommand {
    library_service: Arc<dyn LibraryService>,
}

impl SignInCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignInCommandRequest {
    pub user_id: RecordId,
}

#[derive(Debug, Serialize)]
pub struct SignInCommandResponse {
    pub user: User,
    pub sync: SyncOutcome,
}

#[async_trait]
impl Command<SignInCommandRequest, SignInCommandResponse> for SignInCommand {
    async fn execute(&self, req: SignInCommandRequest) -> Result<SignInCommandResponse, CommandError> {
        let user = User::new(req.user_id);
        self.library_service.sign_in(user.clone()).map_err(CommandError::from)?;
        let sync = self.library_service.sync_with_backend().await.map_err(CommandError::from)?;
        Ok(SignInCommandResponse { user, sync })
    }
}
