use crate::config::Config;
use crate::db::{init_db, Database};
use crate::responses::error_response;
use crate::router::handle;
use anyhow::{Context, Result};
use astra::Server;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod import;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

/// Map-based rental listing board.
#[derive(Parser)]
#[command(name = "house_board", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default).
    Serve,
    /// Bulk insert listings from a JSON array file.
    Import { file: PathBuf },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,house_board=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let db = Database::new(config.database_path.clone());
    init_db(&db).context("Database initialization failed")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, db),
        Command::Import { file } => {
            import::import_file(&db, &file)?;
            Ok(())
        }
    }
}

fn serve(config: &Config, db: Database) -> Result<()> {
    tracing::info!(addr = %config.addr, workers = config.max_workers, "Starting server at http://{}", config.addr);

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    server
        .serve(move |req, _info| match handle(req, &db) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    tracing::error!(error = %err, "request failed");
                }
                error_response(&err)
            }
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
