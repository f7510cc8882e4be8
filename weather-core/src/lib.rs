//! Core library for the `weatherscan` CLI.
//!
//! This crate defines:
//! - Configuration (API key from the environment, optional settings file)
//! - The provider abstraction and the OpenWeather fetcher
//! - Parsing of the OpenWeather response into a [`WeatherReport`]
//! - Console rendering of a lookup outcome
//!
//! It is used by `weatherscan`, but can also be reused by other binaries or services.

pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod parse;
pub mod provider;

pub use config::{Config, Settings};
pub use error::{FetchError, ParseError};
pub use model::WeatherReport;
pub use provider::{Lookup, WeatherProvider, provider_from_config};
