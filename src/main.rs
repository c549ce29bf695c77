//! `umkm-admin`: command-line admin login for the UMKM dashboard backend.
//!
//! Runs the same [`auth::LoginFlow`] as the web client, with a `reqwest`
//! cookie jar in place of the browser and a JSON file in place of
//! `localStorage`.

mod console;
mod error;
mod http;
mod store;

use std::path::PathBuf;
use std::process::ExitCode;

use auth::{ApiConfig, Credentials, LoginFlow, LoginOutcome, TokenStore};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::console::{ConsoleFlag, ConsoleNotifier, ConsoleRouter};
use crate::error::CliError;
use crate::http::HttpAuthApi;
use crate::store::{DEFAULT_STORAGE_PATH, FileTokenStore};

#[derive(Parser, Debug)]
#[command(name = "umkm-admin", about = "UMKM admin dashboard login")]
struct Cli {
    #[arg(long, env = "NEXT_PUBLIC_API_BASE_URL", default_value = auth::config::DEFAULT_API_BASE_URL)]
    base_url: String,

    /// JSON file holding the persisted session token.
    #[arg(long, env = "UMKM_ADMIN_STORAGE", default_value = DEFAULT_STORAGE_PATH)]
    storage: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "UMKM_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the stored session token.
    Token,
    /// Forget the stored session token.
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let store = FileTokenStore::new(cli.storage);

    match cli.command {
        Command::Login { email, password } => {
            let config = ApiConfig::resolve(Some(&cli.base_url));
            let credentials = Credentials::new(email, password).validate()?;
            let outcome = login(config, store, credentials).await?;
            Ok(if outcome.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Token => {
            let token = store
                .load()
                .ok_or_else(|| CliError::NoStoredToken(store.path().display().to_string()))?;
            println!("{token}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Logout => {
            store.clear()?;
            tracing::info!(path = %store.path().display(), "session token cleared");
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn login(
    config: ApiConfig,
    store: FileTokenStore,
    credentials: Credentials,
) -> Result<LoginOutcome, CliError> {
    tracing::info!(base_url = config.base_url(), "logging in");
    let api = HttpAuthApi::new(config)?;
    let cookies = api.cookies();
    let flow = LoginFlow::new(api, cookies, store, ConsoleNotifier, ConsoleRouter, ConsoleFlag);
    Ok(flow.submit_login(credentials).await)
}
