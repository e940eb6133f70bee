use serde::{Deserialize, Serialize};

use crate::{condition::{Condition, WeatherCode}, forecast::FORECAST_DAYS};

/// The part of the Open-Meteo `/forecast` response this crate reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: CurrentWeather,
    pub daily: DailySeries,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weathercode: WeatherCode,
}

/// Parallel daily arrays, indexed by day offset from today.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weathercode: Vec<WeatherCode>,
}

/// One future day's summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub max_temp: f64,
    pub min_temp: f64,
    pub condition: Condition,
}

/// Days at offsets 1, 2 and 3, in that order.
pub type ForecastSeries = [DailyForecast; FORECAST_DAYS];

/// The document printed on stdout. Field order here is the output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature: f64,
    pub condition: Condition,
    pub max_temp: f64,
    pub min_temp: f64,
    pub location: String,
    pub provider: String,
    pub forecast: ForecastSeries,
}
