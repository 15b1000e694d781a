//! Notes API server entry point.
//!
//! # Responsibility
//! - Resolve configuration, bring up logging, open the store, serve HTTP.
//!
//! # Invariants
//! - The store is opened and migrated before the listener binds; a
//!   failed open is fatal, so the health probe can never answer while
//!   the store is unusable.

use log::info;
use postit_core::db::{open_db, open_db_in_memory};
use postit_core::init_logging;
use postit_server::{build_router, AppState, ServerConfig};
use rusqlite::Connection;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    if let Err(message) = run().await {
        // Startup can fail before logging is up; stderr is the one sink
        // guaranteed to exist.
        eprintln!("postit_server startup failed: {message}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|err| err.to_string())?;
    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let conn = open_store(&config)
        .map_err(|err| format!("cannot open database `{}`: {err}", config.database_path))?;

    let router = build_router(AppState::new(conn));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("cannot bind {addr}: {err}"))?;

    info!(
        "event=server_listen module=server status=ok port={} db={} version={}",
        config.port,
        config.database_path,
        postit_core::core_version()
    );

    axum::serve(listener, router)
        .await
        .map_err(|err| format!("server terminated: {err}"))
}

fn open_store(config: &ServerConfig) -> postit_core::db::DbResult<Connection> {
    if config.wants_memory_store() {
        open_db_in_memory()
    } else {
        open_db(&config.database_path)
    }
}
