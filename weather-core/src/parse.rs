//! Turns an OpenWeather "current weather" body into a [`WeatherReport`].
//!
//! Missing leaf keys fall back to defaults, but the `main` and `wind` objects and the first
//! `weather` entry must exist. A key present with the wrong JSON type is an error.

use serde::Deserialize;

use crate::{
    error::ParseError,
    model::{WeatherReport, kelvin_to_celsius},
};

#[derive(Debug, Deserialize)]
struct OwMain {
    #[serde(default)]
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    humidity: i64,
    #[serde(default)]
    pressure: i64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    #[serde(default = "unknown_condition")]
    main: String,
    #[serde(default = "no_description")]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default = "unknown_city")]
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

fn unknown_city() -> String {
    "Unknown City".to_string()
}

fn unknown_condition() -> String {
    "Unknown".to_string()
}

fn no_description() -> String {
    "No description".to_string()
}

/// Parse a raw response body. Temperatures arrive in Kelvin and leave in Celsius.
pub fn parse_report(body: &str) -> Result<WeatherReport, ParseError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or(ParseError::MissingCondition)?;

    Ok(WeatherReport {
        city: parsed.name,
        temperature_c: kelvin_to_celsius(parsed.main.temp),
        feels_like_c: kelvin_to_celsius(parsed.main.feels_like),
        humidity_pct: parsed.main.humidity,
        pressure_hpa: parsed.main.pressure,
        condition: weather.main,
        description: weather.description,
        wind_speed_mps: parsed.wind.speed,
    })
}
