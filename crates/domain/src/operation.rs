//! Operations sent to the gateway, and the conversions that produce them.

use serde::Serialize;

use crate::id::SceneId;

/// Partial update applied to a single light. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LightOperation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimmer: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl LightOperation {
    /// Dim to `fraction` of full brightness, switching the light off at 0%.
    #[must_use]
    pub fn brightness(fraction: f64) -> Self {
        let dimmer = brightness_percent(fraction);
        Self {
            dimmer: Some(dimmer),
            on_off: Some(dimmer > 0),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn temperature(fraction: f64) -> Self {
        Self {
            color_temperature: Some(temperature_percent(fraction)),
            ..Self::default()
        }
    }

    /// Set the color from a hex string, with or without a leading `#`.
    ///
    /// The remainder is not validated; the gateway decides whether it is
    /// acceptable.
    #[must_use]
    pub fn color(hex: &str) -> Self {
        Self {
            color: Some(hex.strip_prefix('#').unwrap_or(hex).to_string()),
            ..Self::default()
        }
    }
}

/// Operation applied to a group of lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupOperation {
    pub scene_id: SceneId,
}

/// Brightness percentage in `[0, 100]`.
#[must_use]
pub fn brightness_percent(fraction: f64) -> u8 {
    clamp_percent(fraction, 0)
}

/// Color temperature percentage in `[1, 100]`; temperature has no "off".
#[must_use]
pub fn temperature_percent(fraction: f64) -> u8 {
    clamp_percent(fraction, 1)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_percent(fraction: f64, floor: u8) -> u8 {
    let percent = (fraction * 100.0).round();
    if percent.is_nan() {
        return floor;
    }
    // in range after the clamp, so the cast is exact
    percent.clamp(f64::from(floor), 100.0) as u8
}
