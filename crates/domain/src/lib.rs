//! # cafehub-domain
//!
//! Pure domain model for the cafehub directory service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **Cafe** record and the candidate shape used on insert
//! - Derive candidate fields from raw request values (flag truthiness)
//! - Hold the shared secret used to authorize deletes
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;

pub mod auth;
pub mod cafe;
