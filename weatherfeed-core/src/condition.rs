//! Mapping from Open-Meteo (WMO) weather codes to a small set of conditions.
//!
//! See <https://open-meteo.com/en/docs> for the code reference.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Provider weather code. Any integer is accepted.
pub type WeatherCode = i64;

/// Normalized weather category, serialized as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Clear,
    Clouds,
    Fog,
    Showers,
    Rainfall,
    Snow,
    Thunder,
    Unknown,
}

impl Condition {
    pub const ALL: [Condition; 8] = [
        Condition::Clear,
        Condition::Clouds,
        Condition::Fog,
        Condition::Showers,
        Condition::Rainfall,
        Condition::Snow,
        Condition::Thunder,
        Condition::Unknown,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "clear",
            Condition::Clouds => "clouds",
            Condition::Fog => "fog",
            Condition::Showers => "showers",
            Condition::Rainfall => "rainfall",
            Condition::Snow => "snow",
            Condition::Thunder => "thunder",
            Condition::Unknown => "unknown",
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Condition::Unknown)
    }
}

/// Classify a weather code. Codes outside the table yield [`Condition::Unknown`].
pub const fn classify(code: WeatherCode) -> Condition {
    match code {
        // clear sky, mainly clear
        0 | 1 => Condition::Clear,
        // partly cloudy, overcast
        2 | 3 => Condition::Clouds,
        // fog, depositing rime fog
        45 | 48 => Condition::Fog,
        // drizzle and freezing drizzle, all intensities
        51 | 53 | 55 | 56 | 57 => Condition::Showers,
        // rain, freezing rain, rain showers
        61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => Condition::Rainfall,
        // snow fall, snow grains, snow showers
        71 | 73 | 75 | 77 | 85 | 86 => Condition::Snow,
        // thunderstorm, with slight or heavy hail
        95 | 96 | 99 => Condition::Thunder,
        _ => Condition::Unknown,
    }
}

impl From<WeatherCode> for Condition {
    fn from(code: WeatherCode) -> Self {
        classify(code)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Condition '{0}' is invalid, acceptable values are: \
     clear, clouds, fog, showers, rainfall, snow, thunder, unknown"
)]
pub struct ParseConditionError(pub String);

impl FromStr for Condition {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseConditionError(s.to_string()))
    }
}
