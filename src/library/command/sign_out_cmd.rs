use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct SignOutCommand {
    library_service: Arc<dyn LibraryService>,
}

impl SignOutCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SignOutCommandRequest {}

#[derive(Debug, Serialize)]
pub struct SignOutCommandResponse {
    pub signed_out: bool,
}

#[async_trait]
impl Command<SignOutCommandRequest, SignOutCommandResponse> for SignOutCommand {
    async fn execute(&self, _req: SignOutCommandRequest) -> Result<SignOutCommandResponse, CommandError> {
        let signed_in = self.library_service.user().is_some();
        self.library_service.sign_out().map_err(CommandError::from)?;
        Ok(SignOutCommandResponse { signed_out: signed_in })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::User;
    use crate::library::command::sign_out_cmd::{SignOutCommand, SignOutCommandRequest};
    use crate::testing::{service_with, FakeRemote};

    #[tokio::test]
    async fn test_should_run_sign_out() {
        let svc = service_with(FakeRemote::new(), Some(User::new(3)));
        let cmd = SignOutCommand::new(svc.clone());

        assert!(cmd.execute(SignOutCommandRequest::default()).await.expect("should sign out").signed_out);
        assert!(svc.user().is_none());
        assert!(!cmd.execute(SignOutCommandRequest::default()).await.expect("should sign out").signed_out);
    }
}
