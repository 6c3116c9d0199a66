//! Books Query Service Library
//!
//! Core modules of the read-only book query API. The binary (`main.rs`) loads
//! the store, builds the router from [`router`] and serves it.
//!
//! ## Architecture Modules
//! - **`catalog`**: The Book Store. Loads the JSON book collection once at startup
//!   into an immutable, ordered snapshot.
//! - **`query`**: The Query Engine. Filtering, grouping, date formatting and page
//!   statistics over the snapshot, plus the Axum handlers exposing them.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: Load failures and API error responses.

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;

use axum::{Extension, Router, routing::get};
use query::engine::QueryEngine;
use query::handlers::*;
use std::sync::Arc;

/// Builds the HTTP router with every `/api/books` endpoint bound to `engine`.
pub fn router(engine: Arc<QueryEngine>) -> Router {
    Router::new()
        .route(ENDPOINT_FILTER, get(handle_filter))
        .route(ENDPOINT_AUTHOR, get(handle_author))
        .route(ENDPOINT_SORTED_COUNT, get(handle_sorted_count))
        .route(ENDPOINT_FORMATTED_DATES, get(handle_formatted_dates))
        .route(ENDPOINT_AVERAGE_MAX_MIN, get(handle_average_max_min))
        .route(ENDPOINT_AUTHOR_WORDCOUNT, get(handle_author_wordcount))
        .route(ENDPOINT_WITHOUT_DATE, get(handle_without_date))
        .route(ENDPOINT_MOST_RECENT, get(handle_most_recent))
        .layer(Extension(engine))
}
