use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::info;
use weatherfeed_core::{Location, OpenMeteoClient, WeatherError, fetch_report};

/// sysexits(3) codes.
const EX_DATAERR: u8 = 65;
const EX_UNAVAILABLE: u8 = 69;
const EX_SOFTWARE: u8 = 70;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weatherfeed",
    version,
    about = "Print current weather and a three-day forecast as JSON"
)]
pub struct Cli {
    /// Log more on stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let location = Location::FIXED;
        let client = OpenMeteoClient::with_defaults()?;

        let report = fetch_report(&client, &location)
            .await
            .with_context(|| format!("Failed to get weather for {}", location.label))?;

        info!(
            location = %report.location,
            condition = %report.condition,
            temperature = report.temperature,
            "Weather report ready"
        );

        let json = report
            .to_pretty_json()
            .context("Failed to encode weather report")?;
        println!("{json}");

        Ok(())
    }
}

/// Process exit status for a failed run.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<WeatherError>() {
        Some(e) if e.is_unavailable() => EX_UNAVAILABLE,
        Some(WeatherError::Decode(_) | WeatherError::MissingDay { .. }) => EX_DATAERR,
        _ => EX_SOFTWARE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use reqwest::StatusCode;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbose_flag_counts() {
        assert_eq!(Cli::parse_from(["weatherfeed"]).verbose, 0);
        assert_eq!(Cli::parse_from(["weatherfeed", "-vv"]).verbose, 2);
        assert_eq!(Cli::parse_from(["weatherfeed", "--verbose"]).verbose, 1);
    }

    #[test]
    fn unexpected_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["weatherfeed", "Berlin"]).is_err());
    }

    #[test]
    fn provider_failures_exit_unavailable() {
        let err = anyhow::Error::new(WeatherError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: String::new(),
        })
        .context("Failed to get weather for X");

        assert_eq!(exit_status(&err), EX_UNAVAILABLE);
    }

    #[test]
    fn data_failures_exit_dataerr() {
        let missing = anyhow::Error::new(WeatherError::MissingDay {
            field: "weathercode",
            index: 3,
            len: 2,
        })
        .context("Failed to get weather for X");
        assert_eq!(exit_status(&missing), EX_DATAERR);

        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let decode = anyhow::Error::new(WeatherError::Decode(source));
        assert_eq!(exit_status(&decode), EX_DATAERR);
    }

    #[test]
    fn other_failures_exit_software() {
        let err = anyhow::anyhow!("Failed to encode weather report");
        assert_eq!(exit_status(&err), EX_SOFTWARE);
    }
}
