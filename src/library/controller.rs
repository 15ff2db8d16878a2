use std::sync::Arc;
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use crate::books::dto::CatalogRecord;
use crate::core::command::{Command, CommandError};
use crate::core::domain::{Configuration, RecordId};
use crate::core::library::Shelf;
use crate::core::repository::RepositoryStore;
use crate::gateway::GatewayPublisherVia;
use crate::library::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::library::command::export_library_cmd::{ExportLibraryCommand, ExportLibraryCommandRequest};
use crate::library::command::find_book_cmd::{FindBookCommand, FindBookCommandRequest};
use crate::library::command::list_library_cmd::{ListLibraryCommand, ListLibraryCommandRequest};
use crate::library::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::library::command::sign_in_cmd::{SignInCommand, SignInCommandRequest};
use crate::library::command::sign_out_cmd::{SignOutCommand, SignOutCommandRequest};
use crate::library::command::sort_library_cmd::{SortLibraryCommand, SortLibraryCommandRequest};
use crate::library::command::sync_library_cmd::{SyncLibraryCommand, SyncLibraryCommandRequest};
use crate::library::command::update_progress_cmd::{UpdateProgressCommand, UpdateProgressCommandRequest};
use crate::library::domain::{LibraryService, SyncOutcome};
use crate::library::factory;
use crate::sync::sorting::SortCriteria;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum LibraryAction {
    /// Put a catalog record on a shelf
    Add {
        catalog_id: String,
        title: String,
        #[arg(long = "author")]
        authors: Vec<String>,
        #[arg(long, default_value = "")]
        thumbnail: String,
        #[arg(long, default_value = "want")]
        shelf: Shelf,
    },
    /// Take a book off its shelf
    Remove {
        catalog_id: String,
    },
    Find {
        catalog_id: String,
    },
    /// Print the library, or a single shelf
    List {
        #[arg(long)]
        shelf: Option<Shelf>,
    },
    Sort {
        #[arg(default_value = "date_desc")]
        criteria: SortCriteria,
    },
    /// Replace the library with the signed-in reader's remote library
    Sync,
    /// Record reading progress (percent) for a book on the current shelf
    Progress {
        catalog_id: String,
        percent: u8,
    },
    Export,
    Login {
        user_id: String,
    },
    Logout,
}

impl LibraryAction {
    // actions that already talk to the remote store themselves
    fn syncs_itself(&self) -> bool {
        matches!(self, LibraryAction::Sync | LibraryAction::Login { .. } | LibraryAction::Logout)
    }
}

// (exit code, message)
pub type CliError = (u8, String);

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { .. } => {
                (2, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (3, format!("{:?}", err))
            }
            CommandError::Storage { .. } => {
                (4, format!("{:?}", err))
            }
            CommandError::Network { .. } => {
                (5, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (6, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (1, format!("{:?}", err))
            }
        }
    }
}

fn to_json<T: Serialize>(res: &T) -> Result<Value, CliError> {
    serde_json::to_value(res).map_err(|err| CliError::from(CommandError::Serialization { message: err.to_string() }))
}

// numeric ids stay numeric so they match what the remote store issues
pub fn parse_user_id(raw: &str) -> RecordId {
    raw.trim().parse::<i64>().map(RecordId::Number).unwrap_or_else(|_| RecordId::from(raw.trim()))
}

pub fn build_service(state: &AppState) -> Result<Arc<dyn LibraryService>, CliError> {
    factory::create_library_service(&state.config, &state.store, GatewayPublisherVia::Logs)
        .map_err(|err| CliError::from(CommandError::from(err)))
}

// Pulls the remote library before the action runs. A failed pull only degrades
// to the local library.
pub async fn startup_sync(svc: Arc<dyn LibraryService>, action: &LibraryAction) -> Result<(), CliError> {
    if action.syncs_itself() || svc.user().is_none() {
        return Ok(());
    }
    let res = SyncLibraryCommand::new(svc).execute(SyncLibraryCommandRequest::default()).await?;
    match res.outcome {
        SyncOutcome::Degraded { reason } => warn!("working offline: {}", reason),
        outcome => info!("startup sync: {:?}", outcome),
    }
    Ok(())
}

pub async fn run(svc: Arc<dyn LibraryService>, action: LibraryAction) -> Result<Value, CliError> {
    match action {
        LibraryAction::Add { catalog_id, title, authors, thumbnail, shelf } => {
            let mut record = CatalogRecord::new(catalog_id.as_str(), title.as_str()).with_thumbnail(thumbnail.as_str());
            record.authors = authors;
            let res = AddBookCommand::new(svc).execute(AddBookCommandRequest::new(record, shelf)).await?;
            to_json(&res)
        }
        LibraryAction::Remove { catalog_id } => {
            let res = RemoveBookCommand::new(svc).execute(RemoveBookCommandRequest { catalog_id }).await?;
            to_json(&res)
        }
        LibraryAction::Find { catalog_id } => {
            let res = FindBookCommand::new(svc).execute(FindBookCommandRequest { catalog_id }).await?;
            to_json(&res)
        }
        LibraryAction::List { shelf } => {
            let res = ListLibraryCommand::new(svc).execute(ListLibraryCommandRequest { shelf }).await?;
            to_json(&res)
        }
        LibraryAction::Sort { criteria } => {
            let res = SortLibraryCommand::new(svc).execute(SortLibraryCommandRequest { criteria }).await?;
            to_json(&res)
        }
        LibraryAction::Sync => {
            let res = SyncLibraryCommand::new(svc).execute(SyncLibraryCommandRequest::default()).await?;
            to_json(&res)
        }
        LibraryAction::Progress { catalog_id, percent } => {
            let req = UpdateProgressCommandRequest { catalog_id, progress: percent };
            let res = UpdateProgressCommand::new(svc).execute(req).await?;
            to_json(&res)
        }
        LibraryAction::Export => {
            let res = ExportLibraryCommand::new(svc).execute(ExportLibraryCommandRequest::default()).await?;
            serde_json::from_str(res.exported.as_str())
                .map_err(|err| CliError::from(CommandError::Serialization { message: err.to_string() }))
        }
        LibraryAction::Login { user_id } => {
            let req = SignInCommandRequest { user_id: parse_user_id(user_id.as_str()) };
            let res = SignInCommand::new(svc).execute(req).await?;
            to_json(&res)
        }
        LibraryAction::Logout => {
            let res = SignOutCommand::new(svc).execute(SignOutCommandRequest::default()).await?;
            to_json(&res)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::domain::{RecordId, User};
    use crate::core::library::Shelf;
    use crate::library::controller::{parse_user_id, run, startup_sync, CliError, LibraryAction};
    use crate::testing::{remote_item, service_with, FakeRemote};

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let (code, _) = CliError::from(CommandError::Validation { message: "bad".to_string(), reason_code: None });
        assert_eq!(2, code);
        let (code, _) = CliError::from(CommandError::NotFound { message: "gone".to_string() });
        assert_eq!(3, code);
        let (code, _) = CliError::from(CommandError::Network { message: "down".to_string(), retryable: true });
        assert_eq!(5, code);
    }

    #[tokio::test]
    async fn test_should_parse_user_ids() {
        assert_eq!(RecordId::Number(42), parse_user_id("42"));
        assert_eq!(RecordId::from("reader-1"), parse_user_id(" reader-1 "));
    }

    #[tokio::test]
    async fn test_should_run_actions() {
        let svc = service_with(FakeRemote::new(), None);
        let added = run(svc.clone(), LibraryAction::Add {
            catalog_id: "vol1".to_string(),
            title: "Piranesi".to_string(),
            authors: vec!["Susanna Clarke".to_string()],
            thumbnail: String::new(),
            shelf: Shelf::Current,
        }).await.expect("should add");
        assert_eq!(true, added["added"]);
        assert_eq!("Susanna Clarke", added["book"]["authors"][0]);

        let found = run(svc.clone(), LibraryAction::Find { catalog_id: "vol1".to_string() }).await.expect("should find");
        assert_eq!(true, found["found"]);

        let exported = run(svc.clone(), LibraryAction::Export).await.expect("should export");
        assert_eq!("vol1", exported["current"][0]["catalog_id"]);

        let (code, _) = run(svc, LibraryAction::Progress { catalog_id: "vol1".to_string(), percent: 120 })
            .await.expect_err("should reject progress");
        assert_eq!(2, code);
    }

    #[tokio::test]
    async fn test_should_sync_on_startup_when_signed_in() {
        let remote = FakeRemote::new();
        remote.set_snapshot(vec![remote_item(1, "vol9", "finished")]);
        let svc = service_with(remote.clone(), Some(User::new(4)));

        startup_sync(svc.clone(), &LibraryAction::Find { catalog_id: "vol9".to_string() }).await.expect("should sync");
        assert!(svc.find_book("vol9"));
        startup_sync(svc, &LibraryAction::Sync).await.expect("should skip");
        assert_eq!(1, remote.list_calls());
    }
}
