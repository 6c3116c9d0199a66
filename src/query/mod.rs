//! Query Engine Module
//!
//! Derived, read-only views over the Book Store and the HTTP surface exposing them.
//!
//! ## Overview
//! Every operation is a pure function of the store snapshot: nothing is cached
//! and nothing is written back. Results preserve store order unless an
//! operation explicitly sorts.
//!
//! ## Submodules
//! - **`engine`**: Filtering, grouping and page/date statistics.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Response shapes and query parameters.

pub mod engine;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
