use anyhow::anyhow;
use clap::Parser;
use tracing::debug;
use weatherscan_core::{
    Config, Lookup, Settings, WeatherProvider, config::api_key_from_env, display::display,
    provider_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherscan", version, about = "Current weather for a city")]
pub struct Cli {
    /// City name, e.g. "London". Quote names containing spaces.
    pub city: Option<String>,
}

impl Cli {
    /// Configuration problems are returned as errors; lookup failures are shown and swallowed.
    pub async fn run(self) -> anyhow::Result<()> {
        let api_key = api_key_from_env()?;

        let city = self
            .city
            .ok_or_else(|| anyhow!("Please provide a city name as a command-line argument."))?;

        let settings = Settings::load()?;
        debug!(?settings, "loaded settings");

        let config = Config::new(api_key, settings);
        let provider = provider_from_config(&config)?;

        let lookup = scan(provider.as_ref(), &city).await;
        display(lookup.as_ref().ok());

        Ok(())
    }
}

/// Run one lookup, printing progress and any failure as it goes.
pub async fn scan(provider: &dyn WeatherProvider, city: &str) -> Lookup {
    println!("Fetching weather data for {city}...");

    let lookup = provider.current(city).await;

    if let Err(err) = &lookup {
        if err.is_transport() {
            eprintln!("{err}");
        } else {
            println!("{err}");
        }
    }

    lookup
}
