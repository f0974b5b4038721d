//! # lumohub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the lights API: group and scene listings as JSON, light and
//!   scene commands as plain-text bodies (`/api/...`)
//! - Expose gateway maintenance (`/admin/gateway/reboot`)
//! - Optionally serve the static web client from a directory
//! - Map application errors into HTTP status codes
//!
//! ## Dependency rule
//! Depends on `lumohub-app` (for port traits and services) and
//! `lumohub-domain` (for read models and ids). Never leaks axum types into
//! the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
