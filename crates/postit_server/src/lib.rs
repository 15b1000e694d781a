//! Notes API server: configuration, router assembly, and handlers.
//!
//! The binary entry point lives in `main.rs`; everything here is a
//! library so integration tests can drive the router in-process.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use app::build_router;
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, MessageBody};
pub use state::AppState;
