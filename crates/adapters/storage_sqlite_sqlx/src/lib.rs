//! # cafehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `cafehub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the `cafe` table on startup when it is absent
//! - Run every mutation in its own transaction and classify constraint failures
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `cafehub-app` (for port traits) and `cafehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod cafe_repo;
pub mod error;
pub mod pool;

pub use cafe_repo::SqliteCafeRepository;
pub use pool::{Config, Database};
