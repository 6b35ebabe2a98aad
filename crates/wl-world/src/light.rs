//! Ambient light modes and the daylight curve.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// Light level of a fully lit map.
pub const LIGHT_LEVEL: f32 = 1.0;

/// Light level floor, used for dark maps and deep night.
pub const DARK_LEVEL: f32 = 0.5;

/// How a map is lit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LightMode {
    /// Light follows the day/night cycle.
    Natural,
    /// Always fully lit.
    #[default]
    Light,
    /// Always at the dark floor.
    Dark,
}

impl LightMode {
    /// The light multiplier for this mode at a point in the day.
    ///
    /// Natural light traces a cosine through the day: it bottoms out at
    /// [`DARK_LEVEL`] overnight, climbs through the morning, and holds at
    /// [`LIGHT_LEVEL`] around early afternoon. The curve peaks at 2 PM,
    /// an hour of lag behind the sun.
    pub fn level(self, percent_of_day: f32) -> f32 {
        match self {
            LightMode::Natural => ((1.0 - ((percent_of_day - 1.0 / 12.0) * TAU).cos()) * 0.75)
                .clamp(DARK_LEVEL, LIGHT_LEVEL),
            LightMode::Light => LIGHT_LEVEL,
            LightMode::Dark => DARK_LEVEL,
        }
    }
}
