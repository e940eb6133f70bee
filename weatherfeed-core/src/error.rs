use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between the HTTP request and the finished report.
///
/// Unknown weather codes are not represented here: they classify as
/// [`Condition::Unknown`](crate::Condition::Unknown).
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("Failed to send request to Open-Meteo")]
    Transport(#[source] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Open-Meteo request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body is not the expected JSON shape.
    #[error("Failed to parse Open-Meteo forecast JSON")]
    Decode(#[source] serde_json::Error),

    /// A daily series is too short to hold the requested day.
    #[error("daily.{field} has {len} entries, day offset {index} is missing")]
    MissingDay {
        field: &'static str,
        index: usize,
        len: usize,
    },
}

impl WeatherError {
    /// True when the failure came from talking to the provider rather than
    /// from the data it returned.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            WeatherError::Client(_) | WeatherError::Transport(_) | WeatherError::Status { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_day_message_names_field_and_offset() {
        let err = WeatherError::MissingDay { field: "weathercode", index: 3, len: 2 };
        assert_eq!(err.to_string(), "daily.weathercode has 2 entries, day offset 3 is missing");
        assert!(!err.is_unavailable());
    }

    #[test]
    fn status_error_is_unavailable() {
        let err = WeatherError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream down".into(),
        };
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn decode_error_is_not_unavailable() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!WeatherError::Decode(source).is_unavailable());
    }
}
