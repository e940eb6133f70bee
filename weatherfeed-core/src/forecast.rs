//! Reshaping of the provider's daily arrays into per-day summaries.
//!
//! Index 0 of every daily array is today, which the report already carries
//! as the current reading, so the forecast window starts at
//! [`FORECAST_START_OFFSET`].

use crate::{
    condition::classify,
    error::WeatherError,
    model::{DailyForecast, DailySeries, ForecastSeries},
};

/// First day offset included in the forecast (0 is today).
pub const FORECAST_START_OFFSET: usize = 1;

/// Number of forecast days in a report.
pub const FORECAST_DAYS: usize = 3;

/// Days the provider has to return: today plus the forecast window.
pub const REQUIRED_DAYS: usize = FORECAST_START_OFFSET + FORECAST_DAYS;

impl DailySeries {
    /// Summary for the day at `offset`, failing if any array is too short.
    pub fn day(&self, offset: usize) -> Result<DailyForecast, WeatherError> {
        Ok(DailyForecast {
            max_temp: at(&self.temperature_2m_max, "temperature_2m_max", offset)?,
            min_temp: at(&self.temperature_2m_min, "temperature_2m_min", offset)?,
            condition: classify(at(&self.weathercode, "weathercode", offset)?),
        })
    }
}

/// Build the forecast for offsets 1..=3. Index 0 is never read.
pub fn reshape(daily: &DailySeries) -> Result<ForecastSeries, WeatherError> {
    let day = |k: usize| daily.day(FORECAST_START_OFFSET + k);
    Ok([day(0)?, day(1)?, day(2)?])
}

pub(crate) fn at<T: Copy>(
    values: &[T],
    field: &'static str,
    index: usize,
) -> Result<T, WeatherError> {
    values.get(index).copied().ok_or(WeatherError::MissingDay {
        field,
        index,
        len: values.len(),
    })
}
