//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`LumoError`]
//! via `#[from]` at the port boundary.

use crate::capability::Capability;
use crate::id::LightId;
use crate::light::Spectrum;

/// Top-level error returned by commands issued against the light model.
#[derive(Debug, thiserror::Error)]
pub enum LumoError {
    #[error("unknown device")]
    UnknownDevice(#[from] UnknownDeviceError),

    #[error("unsupported operation")]
    Unsupported(#[from] UnsupportedOperationError),

    #[error("transport error")]
    Transport(#[from] TransportError),
}

/// A command referenced a light that is not in the cache.
#[derive(Debug, thiserror::Error)]
#[error("light {id} is not known")]
pub struct UnknownDeviceError {
    pub id: LightId,
}

/// A command is valid in general but not for this light's spectrum.
#[derive(Debug, thiserror::Error)]
#[error("{capability} is not supported by light {id} with spectrum {spectrum}")]
pub struct UnsupportedOperationError {
    pub id: LightId,
    pub capability: Capability,
    pub spectrum: Spectrum,
}

/// The gateway connection is absent or the underlying call failed.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("gateway not connected")]
    NotConnected,

    #[error("gateway request failed")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wrap any adapter error as a failed gateway request.
    pub fn request(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Request(Box::new(err))
    }
}
