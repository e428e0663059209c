//! # cafehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** under `/api` (`random`, `all`, `search`, `add`,
//!   `update-price/{id}`, `report-closed/{id}`)
//! - Serve a static home page at `/`
//! - Parse form bodies and query strings into typed input structs
//! - Map application results into JSON responses and status codes
//!
//! ## Dependency rule
//! Depends on `cafehub-app` (for port traits and services) and `cafehub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod format;
pub mod home;
pub mod router;
pub mod state;
