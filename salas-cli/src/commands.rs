//! Subcommand implementations.

use std::fs;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::info;
use salas_lib::ListClient;
use salas_lib::ListKind;
use salas_lib::ListRenderer;
use salas_lib::RendererConfig;
use salas_lib::error::SessionError;
use salas_lib::session;
use salas_lib::session::BrowserNavigator;
use salas_lib::session::LogoutOutcome;
use salas_lib::session::Session;
use salas_lib::session::SqliteBackend;
use salas_lib::sink::MemorySink;
use thiserror::Error;

use crate::cli::Cli;
use crate::cli::Command;
use crate::paths;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] salas_lib::error::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("no data directory available; pass --session-db")]
    NoDataDir,
    #[error("failed to load {0}; the error block was written to the output")]
    LoadFailed(ListKind),
}

pub async fn run(cli: Cli) -> Result<(), CliError> {
    let config = config_from(&cli);
    match cli.command {
        Command::Rooms { output } => render(config, ListKind::Rooms, output.as_deref()).await,
        Command::Reservations { output } => {
            render(config, ListKind::Reservations, output.as_deref()).await
        }
        Command::Whoami => {
            let session = open_session(cli.session_db).await?;
            if let Some(email) = session.current_user_email().await? {
                println!("{}", email);
            }
            Ok(())
        }
        Command::LoginAs { email } => {
            let session = open_session(cli.session_db).await?;
            session.set_current_user_email(&email).await?;
            info!("stored current user {}", email);
            Ok(())
        }
        Command::Logout { yes } => {
            let session = open_session(cli.session_db).await?;
            let confirm = |prompt: &str| yes || ask(prompt);
            let outcome =
                session::logout(&session, &confirm, &BrowserNavigator, &config.login_url).await?;
            if outcome == LogoutOutcome::Cancelled {
                println!("Cancelado.");
            }
            Ok(())
        }
    }
}

fn config_from(cli: &Cli) -> RendererConfig {
    let mut config = RendererConfig::new(&cli.api_url).with_login_url(&cli.login_url);
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

async fn render(config: RendererConfig, kind: ListKind, output: Option<&Path>) -> Result<(), CliError> {
    let client = ListClient::from_config(config)?;
    let sink = Arc::new(MemorySink::new());
    let renderer = ListRenderer::with_shared_sink(client, sink.clone());

    let outcome = renderer.render(kind).await;

    let content = sink.content(kind.region()).unwrap_or_default();
    match output {
        Some(path) => {
            fs::write(path, &content)?;
            info!("wrote region {} to {}", kind.region(), path.display());
        }
        None => io::stdout().write_all(content.as_bytes())?,
    }

    if outcome.is_failure() {
        return Err(CliError::LoadFailed(kind));
    }
    Ok(())
}

async fn open_session(path: Option<PathBuf>) -> Result<Session, CliError> {
    let path = match path {
        Some(path) => path,
        None => paths::session_db().ok_or(CliError::NoDataDir)?,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(Session::new(SqliteBackend::open(&path).await?))
}

fn ask(prompt: &str) -> bool {
    print!("{} [s/N] ", prompt);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    is_yes(&answer)
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}
