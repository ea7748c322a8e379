use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

const DEFAULT_DB_PATH: &str = "house_board.sqlite3";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_WORKERS: usize = 8;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub addr: SocketAddr,
    pub max_workers: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_path: env::var("HOUSE_BOARD_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            addr: env::var("HOUSE_BOARD_ADDR")
                .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
                .parse()
                .context("HOUSE_BOARD_ADDR must be a socket address like 127.0.0.1:3000")?,
            max_workers: match env::var("HOUSE_BOARD_WORKERS") {
                Ok(raw) => match raw.trim().parse::<usize>() {
                    Ok(n) if n > 0 => n,
                    _ => anyhow::bail!("HOUSE_BOARD_WORKERS must be a positive number, got {raw:?}"),
                },
                Err(_) => DEFAULT_WORKERS,
            },
        })
    }
}
