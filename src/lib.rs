//! nearcam relay library crate.
//!
//! # Purpose
//! Exposes the relay API surface, configuration, caching, and the webcam
//! directory client for use by the binary and the integration tests.
//!
//! # Notes
//! Module boundaries mirror the HTTP API and the two core components the
//! service is built around: great-circle distance and the response cache.
pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod geo;
pub mod observability;
pub mod upstream;
