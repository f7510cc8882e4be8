use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, redirect};
use tracing::{debug, warn};

use crate::{config::Settings, error::FetchError, parse::parse_report};

use super::{Lookup, WeatherProvider};

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout())
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            endpoint: settings.endpoint.clone(),
            http,
        })
    }

    async fn fetch_current(&self, city: &str) -> Lookup {
        debug!(endpoint = %self.endpoint, city, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = res.status();
        let body = res.text().await.map_err(transport_error)?;

        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        match status {
            StatusCode::OK => parse_report(&body).map_err(|err| {
                warn!(%err, "could not parse OpenWeather response");
                FetchError::from(err)
            }),
            StatusCode::NOT_FOUND => {
                warn!(city, "OpenWeather does not know this city");
                Err(FetchError::CityNotFound)
            }
            _ => {
                warn!(status = status.as_u16(), "OpenWeather request failed");
                Err(FetchError::Api { status, body })
            }
        }
    }
}

/// The request URL carries the API key, so it is dropped before the error is shown or logged.
fn transport_error(err: reqwest::Error) -> FetchError {
    let err = err.without_url();
    warn!(%err, "OpenWeather request did not complete");
    FetchError::Transport(err)
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Lookup {
        self.fetch_current(city).await
    }
}
