//! namestore-server: HTTP service for storing and listing names
//!
//! Two routes over a single SQLite table:
//! - `POST /store` inserts a name and responds 201
//! - `GET /names` lists every stored name as `[id, value]` pairs
//!
//! Each request opens its own database connection; the only state shared
//! between requests is the configured database path.

pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;

pub use db::Store;
pub use error::{ServerError, ServerResult};
pub use server::{create_router, run_server, ServeArgs};
