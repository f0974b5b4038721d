//! # lumohub-domain
//!
//! Pure domain model for the lumohub lighting bridge.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Lights** (gateway-controlled bulbs with a spectrum) and other
//!   **Accessories** reported by the gateway
//! - Define **Groups** (named sets of lights, including the reserved super-group)
//! - Define **Scenes** (presets stored on the gateway)
//! - Define **Events** pushed by the gateway and **Operations** sent back to it
//! - Decide which operations a light supports (capabilities)
//! - Rank entities by how often they are used
//! - Render read models (summaries) returned to API callers
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod capability;
pub mod credentials;
pub mod event;
pub mod group;
pub mod light;
pub mod operation;
pub mod scene;
pub mod summary;
pub mod usage;
