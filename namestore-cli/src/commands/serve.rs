//! HTTP server command.

use anyhow::{Context, Result};
use namestore_server::ServeArgs;

/// Run the HTTP server (blocks until shutdown).
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    namestore_server::run_server(args)
        .await
        .context("Server error")?;

    Ok(())
}
