//! Main server module - Axum setup and router configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::db::Store;
use crate::routes;

/// Server command-line arguments
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    pub port: u16,

    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Database file path
    #[arg(long, env = "DATABASE_PATH", default_value = "/data/names.db")]
    pub db_path: PathBuf,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            port: 5000,
            bind: "0.0.0.0".to_string(),
            db_path: PathBuf::from("/data/names.db"),
        }
    }
}

/// Run the server with the given arguments.
///
/// Initializes the store before the listener starts accepting
/// connections; an initialization failure aborts startup.
pub async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    info!("Opening database at {}", args.db_path.display());
    let store = Store::open(&args.db_path)?;

    let app = create_router(store);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Starting namestore-server on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the Axum router with both routes.
///
/// All origins are allowed on all routes: the service is a fully public
/// API.
pub fn create_router(store: Store) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/store", post(routes::store_name))
        .route("/names", get(routes::list_names))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(store)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    #[test]
    fn default_args() {
        let args = ServeArgs::default();
        assert_eq!(args.port, 5000);
        assert_eq!(args.bind, "0.0.0.0");
        assert_eq!(args.db_path, PathBuf::from("/data/names.db"));
    }

    #[tokio::test]
    async fn store_then_list() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("names.db")).unwrap();
        let app = create_router(store);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/store")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "alice"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(Request::builder().uri("/names").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("names.db")).unwrap();
        let app = create_router(store);

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
