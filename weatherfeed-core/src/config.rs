use std::time::Duration;

/// Latitude of the reported location.
pub const LATITUDE: f64 = -23.5475;
/// Longitude of the reported location.
pub const LONGITUDE: f64 = -46.6361;
/// Free-text label copied into the report.
pub const LOCATION: &str = "São Paulo, SP";

/// Provider name copied into the report.
pub const PROVIDER: &str = "OpenMeteo";

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the weather is reported for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub label: &'static str,
}

impl Location {
    /// The compiled-in location.
    pub const FIXED: Location = Location {
        latitude: LATITUDE,
        longitude: LONGITUDE,
        label: LOCATION,
    };
}

impl Default for Location {
    fn default() -> Self {
        Self::FIXED
    }
}

/// HTTP client settings for the Open-Meteo endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base, without the trailing `/forecast`.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
