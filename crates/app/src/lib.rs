//! # lumohub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Gateway` — light and group operations, reboot
//!   - `GatewayConnector` — discover, authenticate, connect
//!   - `CredentialStore` — load & save gateway credentials
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CommandService` — brightness, temperature, color, scene activation
//!   - `QueryService` — group and scene listings
//! - Provide **in-process infrastructure** that doesn't need IO: the light
//!   cache, scene usage counters, the gateway handle and the event pump
//!
//! ## Dependency rule
//! Depends on `lumohub-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod cache;
pub mod gateway_handle;
pub mod ports;
pub mod services;
pub mod session;
pub mod usage;
