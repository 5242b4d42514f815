//! HTTP server module.
//!
//! Serves plain HTTP; TLS is expected to be terminated by a reverse proxy.
//! The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Static file serving for the landing page assets

mod server;
mod shutdown;
pub mod static_files;

pub use server::{start_server, ServerError};
