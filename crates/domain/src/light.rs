//! Light — a gateway-controlled bulb.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::LightId;

/// Color capability class of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spectrum {
    /// Dimmable only.
    #[default]
    None,
    /// Color temperature can be adjusted.
    White,
    /// Full color can be set.
    Rgb,
}

impl fmt::Display for Spectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::White => f.write_str("white"),
            Self::Rgb => f.write_str("rgb"),
        }
    }
}

/// Snapshot of a light as last reported by the gateway.
///
/// A light is always replaced wholesale when the gateway reports it again,
/// so there is no field-level merge logic here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    pub id: LightId,
    pub name: String,
    pub spectrum: Spectrum,
    pub on: bool,
    /// Dimmer level, 0–100.
    pub dimmer: u8,
    /// Color temperature, 1–100. Only meaningful for [`Spectrum::White`].
    pub color_temperature: Option<u8>,
    /// Hex color without a leading `#`. Only meaningful for [`Spectrum::Rgb`].
    pub color: Option<String>,
}

impl Light {
    /// Create a builder for constructing a [`Light`].
    #[must_use]
    pub fn builder(id: LightId) -> LightBuilder {
        LightBuilder {
            id,
            name: String::new(),
            spectrum: Spectrum::None,
            on: false,
            dimmer: 0,
            color_temperature: None,
            color: None,
        }
    }

    /// Brightness as a fraction in `[0, 1]`; a light that is off reports 0.
    #[must_use]
    pub fn brightness(&self) -> f64 {
        if self.on {
            f64::from(self.dimmer.min(100)) / 100.0
        } else {
            0.0
        }
    }
}

/// Step-by-step builder for [`Light`].
#[derive(Debug)]
pub struct LightBuilder {
    id: LightId,
    name: String,
    spectrum: Spectrum,
    on: bool,
    dimmer: u8,
    color_temperature: Option<u8>,
    color: Option<String>,
}

impl LightBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn spectrum(mut self, spectrum: Spectrum) -> Self {
        self.spectrum = spectrum;
        self
    }

    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    #[must_use]
    pub fn dimmer(mut self, dimmer: u8) -> Self {
        self.dimmer = dimmer.min(100);
        self
    }

    #[must_use]
    pub fn color_temperature(mut self, value: u8) -> Self {
        self.color_temperature = Some(value);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Light {
        Light {
            id: self.id,
            name: self.name,
            spectrum: self.spectrum,
            on: self.on,
            dimmer: self.dimmer,
            color_temperature: self.color_temperature,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_dimmer_fraction_when_on() {
        let light = Light::builder(LightId::new(1)).on(true).dimmer(37).build();
        assert!((light.brightness() - 0.37).abs() < f64::EPSILON);
    }

    #[test]
    fn should_report_zero_brightness_when_off() {
        let light = Light::builder(LightId::new(1)).on(false).dimmer(80).build();
        assert!(light.brightness().abs() < f64::EPSILON);
    }

    #[test]
    fn should_clamp_dimmer_in_builder() {
        let light = Light::builder(LightId::new(1)).dimmer(250).build();
        assert_eq!(light.dimmer, 100);
    }

    #[test]
    fn should_serialize_spectrum_lowercase() {
        assert_eq!(serde_json::to_string(&Spectrum::Rgb).unwrap(), "\"rgb\"");
        assert_eq!(Spectrum::White.to_string(), "white");
    }

    #[test]
    fn should_default_to_dimmable_only_spectrum() {
        let light = Light::builder(LightId::new(3)).name("Hall").build();
        assert_eq!(light.spectrum, Spectrum::None);
        assert!(light.color.is_none());
    }
}
