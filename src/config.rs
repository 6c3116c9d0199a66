//! Service Configuration
//!
//! Every setting can be given on the command line or through the environment.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "books-service", about = "Read-only query API over a static book collection")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "BOOKS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// JSON file holding the book collection.
    #[arg(long, env = "BOOKS_FILE", default_value = "data/books.json")]
    pub books: PathBuf,

    /// Maximum log level (trace, debug, info, warn, error).
    #[arg(long, env = "BOOKS_LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,
}
