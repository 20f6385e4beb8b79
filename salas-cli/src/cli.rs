//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use salas_lib::config::DEFAULT_BASE_URL;
use salas_lib::config::DEFAULT_LOGIN_URL;

/// Lists rooms and reservations from the reservation backend.
#[derive(Debug, Parser)]
#[command(name = "salas", version)]
pub struct Cli {
    /// Base URL of the backend API.
    #[arg(long, env = "SALAS_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Give up on a request after this many seconds (default: wait forever).
    #[arg(long, env = "SALAS_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Session database path (default: platform data directory).
    #[arg(long, env = "SALAS_SESSION_DB", global = true)]
    pub session_db: Option<PathBuf>,

    /// Where logout sends the user.
    #[arg(long, env = "SALAS_LOGIN_URL", default_value = DEFAULT_LOGIN_URL, global = true)]
    pub login_url: String,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the room list.
    Rooms {
        /// Write the HTML fragment to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the reservation list.
    Reservations {
        /// Write the HTML fragment to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the signed-in user's email.
    Whoami,
    /// Store the signed-in user's email.
    LoginAs {
        email: String,
    },
    /// Clear the session and open the login page.
    Logout {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}
