use crate::{Config, FetchError, WeatherReport, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Outcome of one lookup: a report, or the reason there is none.
pub type Lookup = Result<WeatherReport, FetchError>;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for `city`. Performs at most one request.
    async fn current(&self, city: &str) -> Lookup;
}

/// Construct the provider for a run. The HTTP client it owns lives until the provider drops.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = OpenWeatherProvider::new(config.api_key.clone(), &config.settings)?;
    Ok(Box::new(provider))
}
