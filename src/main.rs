use books_service::catalog::store::BookStore;
use books_service::config::Config;
use books_service::query::engine::QueryEngine;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Loading books from {}", config.books.display());

    // 1. Book Store (read once, immutable afterwards):
    let store = Arc::new(BookStore::load(&config.books));
    if store.is_empty() {
        tracing::warn!("Book store is empty, every query will return no data");
    }

    // 2. Query Engine:
    let engine = Arc::new(QueryEngine::new(store));

    // 3. HTTP Router:
    let app = books_service::router(engine);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
