//! # cafehub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the `CafeRepository` port that storage adapters implement
//! - Define the `CafeService` use-cases: random pick, listing, search by
//!   location, insert, price update, and authorized removal
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `cafehub-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
