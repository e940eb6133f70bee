use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::{ClientConfig, Location},
    error::WeatherError,
    forecast::REQUIRED_DAYS,
    model::ForecastResponse,
};

/// Fields requested from the `daily` block.
const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min";

/// Client for the Open-Meteo `/forecast` endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    config: ClientConfig,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new(config: ClientConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(WeatherError::Client)?;

        Ok(Self { config, http })
    }

    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(ClientConfig::default())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    fn query(location: &Location) -> [(&'static str, String); 6] {
        [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", REQUIRED_DAYS.to_string()),
        ]
    }

    /// Fetch current weather plus today and the next three days.
    #[instrument(skip_all, fields(lat = location.latitude, lon = location.longitude))]
    pub async fn fetch(&self, location: &Location) -> Result<ForecastResponse, WeatherError> {
        let url = self.forecast_url();
        debug!(url = %url, "Fetching Open-Meteo forecast");

        let res = self
            .http
            .get(&url)
            .query(&Self::query(location))
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Transport)?;
        debug!(status = %status, bytes = body.len(), "Open-Meteo responded");

        if !status.is_success() {
            return Err(WeatherError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(WeatherError::Decode)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_url_appends_endpoint() {
        let client = OpenMeteoClient::with_defaults().expect("client should build");
        assert_eq!(client.forecast_url(), "https://api.open-meteo.com/v1/forecast");
    }

    #[test]
    fn forecast_url_tolerates_trailing_slash() {
        let client = OpenMeteoClient::new(ClientConfig {
            base_url: "http://localhost:8080/v1/".into(),
            ..Default::default()
        })
        .expect("client should build");
        assert_eq!(client.forecast_url(), "http://localhost:8080/v1/forecast");
    }

    #[test]
    fn query_requests_current_weather_and_four_days() {
        let location = Location { latitude: 52.52, longitude: 13.41, label: "Berlin" };
        let query = OpenMeteoClient::query(&location);

        let get = |key: &str| {
            query.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
        };
        assert_eq!(get("latitude"), Some("52.52"));
        assert_eq!(get("longitude"), Some("13.41"));
        assert_eq!(get("current_weather"), Some("true"));
        assert_eq!(get("daily"), Some("weathercode,temperature_2m_max,temperature_2m_min"));
        assert_eq!(get("timezone"), Some("auto"));
        assert_eq!(get("forecast_days"), Some("4"));
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("not found"), "not found");
    }

    #[test]
    fn truncate_body_cuts_long_bodies_on_char_boundary() {
        let body = "é".repeat(150);
        let cut = truncate_body(&body);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.len(), 200 + 3);
    }
}
