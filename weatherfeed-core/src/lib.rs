//! Core library for the `weatherfeed` CLI.
//!
//! This crate defines:
//! - Classification of Open-Meteo weather codes into a few conditions
//! - Reshaping of the daily arrays into a three-day forecast
//! - The Open-Meteo HTTP client and the report document it feeds
//!
//! It is used by `weatherfeed-cli`, but can also be reused by other binaries.

pub mod condition;
pub mod config;
pub mod error;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod report;

pub use condition::{Condition, ParseConditionError, WeatherCode, classify};
pub use config::{ClientConfig, Location};
pub use error::WeatherError;
pub use forecast::{FORECAST_DAYS, FORECAST_START_OFFSET, reshape};
pub use model::{DailyForecast, DailySeries, ForecastResponse, ForecastSeries, WeatherReport};
pub use provider::OpenMeteoClient;
pub use report::assemble;

/// Fetch from Open-Meteo and build the report for `location`.
pub async fn fetch_report(
    client: &OpenMeteoClient,
    location: &Location,
) -> Result<WeatherReport, WeatherError> {
    let response = client.fetch(location).await?;
    assemble(&response, location)
}
