//! Database initialization command.
//!
//! Prepares the store without starting the server, for deploy scripts
//! and container init hooks that want the schema in place up front.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use namestore_server::Store;
use tracing::info;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database file path
    #[arg(long, env = "DATABASE_PATH", default_value = "/data/names.db")]
    pub db_path: PathBuf,
}

/// Ensure the database directory, file, and schema exist, then exit.
pub fn run_init_db(args: InitDbArgs) -> Result<()> {
    let store = Store::open(&args.db_path).context("Failed to initialize database")?;
    info!("Database ready at {}", store.path().display());

    Ok(())
}
