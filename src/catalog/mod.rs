//! Book Store Module
//!
//! Holds the book collection the service answers queries over.
//!
//! ## Core Concepts
//! - **Snapshot**: Books are read once at startup into an ordered `Vec` and never mutated afterwards.
//! - **Fallback**: A source that cannot be read or parsed yields an empty store, so the
//!   service still starts and every query answers with an empty result.
//! - **Sharing**: The store is wrapped in an `Arc` and handed to the query layer; no locking is needed.

pub mod store;
pub mod types;
