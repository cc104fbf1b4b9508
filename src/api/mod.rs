//! Relay HTTP API module.
//!
//! # Purpose
//! Exposes the route handler modules, the shared error helpers, and the
//! payload types used across the API surface.
pub mod error;
pub mod openapi;
pub mod system;
pub mod types;
pub mod webcams;
