use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use tracing::error;
use shelfsync::core::domain::Configuration;
use shelfsync::core::repository::RepositoryStore;
use shelfsync::library::controller::{build_service, run, startup_sync, AppState, LibraryAction};
use shelfsync::utils::logs::setup_tracing;

#[derive(Parser)]
#[command(name = "shelves", about = "Reading shelves kept locally and synced to your account")]
struct Cli {
    /// Directory holding the persisted library
    #[arg(long, env = "SHELFSYNC_DATA_DIR", default_value = ".shelfsync")]
    data_dir: PathBuf,
    #[arg(long, env = "SHELFSYNC_API_BASE")]
    api_base: Option<String>,
    /// Skip the startup sync
    #[arg(long)]
    offline: bool,
    #[arg(long)]
    json_logs: bool,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    action: LibraryAction,
}

#[tokio::main]
async fn main() -> ExitCode {
    let Cli { data_dir, api_base, offline, json_logs, verbose, action } = Cli::parse();
    setup_tracing(json_logs, verbose);

    let mut config = Configuration::from_env();
    if let Some(api_base) = api_base {
        config.api_base = api_base.trim_end_matches('/').to_string();
    }
    let state = AppState::new(config, RepositoryStore::LocalFile(data_dir));

    let res = async {
        let svc = build_service(&state)?;
        if !offline {
            startup_sync(svc.clone(), &action).await?;
        }
        run(svc, action).await
    }.await;

    match res {
        Ok(json) => match serde_json::to_string_pretty(&json) {
            Ok(out) => {
                println!("{}", out);
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!("failed to print result: {}", err);
                ExitCode::FAILURE
            }
        },
        Err((code, message)) => {
            error!("{}", message);
            ExitCode::from(code)
        }
    }
}
