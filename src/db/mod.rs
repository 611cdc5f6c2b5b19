//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: connection handle plus the resource store and request log

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{AccessRequest, DeleteOutcome, NewResource, Resource};
pub use schema::SQLITE_INIT;
pub use sqlite::{AccessRequestLog, Database, ResourceStore, SqlitePool};
