//! Gateway credentials issued in exchange for the security code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity and pre-shared key used to open a session with the gateway.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub identity: String,
    pub psk: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("psk", &"<redacted>")
            .finish()
    }
}
