//! Application services — use-case implementations.
//!
//! Services receive the shared cache, the usage tracker and a gateway port
//! through their constructors; nothing is looked up at runtime.

pub mod command_service;
pub mod query_service;
