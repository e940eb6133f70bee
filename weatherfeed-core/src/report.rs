//! Assembly and encoding of the final [`WeatherReport`].

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    condition::classify,
    config::{Location, PROVIDER},
    error::WeatherError,
    forecast::{at, reshape},
    model::{ForecastResponse, WeatherReport},
};

/// Offset of today in the daily arrays.
const TODAY: usize = 0;

/// Combine the current reading, today's range and the forecast into one report.
pub fn assemble(
    response: &ForecastResponse,
    location: &Location,
) -> Result<WeatherReport, WeatherError> {
    let daily = &response.daily;

    Ok(WeatherReport {
        temperature: response.current_weather.temperature,
        condition: classify(response.current_weather.weathercode),
        max_temp: at(&daily.temperature_2m_max, "temperature_2m_max", TODAY)?,
        min_temp: at(&daily.temperature_2m_min, "temperature_2m_min", TODAY)?,
        location: location.label.to_string(),
        provider: PROVIDER.to_string(),
        forecast: reshape(daily)?,
    })
}

impl WeatherReport {
    /// JSON with 4-space indentation, fields in declaration order.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
