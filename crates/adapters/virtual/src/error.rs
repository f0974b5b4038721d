//! Virtual gateway error types.

use lumohub_domain::error::{LumoError, TransportError};
use lumohub_domain::id::{LightId, SceneId};

/// Errors raised by the simulated gateway itself.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    #[error("security code rejected")]
    SecurityCodeRejected,

    #[error("credentials rejected")]
    CredentialsRejected,

    #[error("device {0} is not paired with the gateway")]
    UnknownDevice(LightId),

    #[error("scene {0} does not exist on the gateway")]
    UnknownScene(SceneId),

    #[error("invalid color value")]
    InvalidColor,
}

impl From<VirtualError> for LumoError {
    fn from(err: VirtualError) -> Self {
        Self::Transport(TransportError::request(err))
    }
}
