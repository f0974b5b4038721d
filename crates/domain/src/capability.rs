//! Capability classification — which operations a light accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedOperationError;
use crate::light::{Light, Spectrum};

/// An adjustable property of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Brightness,
    Temperature,
    Color,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brightness => f.write_str("brightness"),
            Self::Temperature => f.write_str("temperature"),
            Self::Color => f.write_str("color"),
        }
    }
}

/// Every light can be dimmed.
#[must_use]
pub fn can_set_brightness(_light: &Light) -> bool {
    true
}

#[must_use]
pub fn can_set_temperature(light: &Light) -> bool {
    light.spectrum == Spectrum::White
}

#[must_use]
pub fn can_set_color(light: &Light) -> bool {
    light.spectrum == Spectrum::Rgb
}

impl Capability {
    /// Whether `light` supports this capability.
    #[must_use]
    pub fn supported_by(self, light: &Light) -> bool {
        match self {
            Self::Brightness => can_set_brightness(light),
            Self::Temperature => can_set_temperature(light),
            Self::Color => can_set_color(light),
        }
    }

    /// Fail unless `light` supports this capability.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedOperationError`] when the light's spectrum does
    /// not allow the operation.
    pub fn ensure(self, light: &Light) -> Result<(), UnsupportedOperationError> {
        if self.supported_by(light) {
            Ok(())
        } else {
            Err(UnsupportedOperationError {
                id: light.id,
                capability: self,
                spectrum: light.spectrum,
            })
        }
    }
}
