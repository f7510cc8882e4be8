use reqwest::StatusCode;
use thiserror::Error;

/// The response body could not be turned into a report.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse weather JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Weather JSON has an empty 'weather' array")]
    MissingCondition,
}

/// Why a lookup produced no report.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("City not found! Please check the spelling.")]
    CityNotFound,

    #[error("API Error. HTTP Code: {}\nResponse: {}", .status.as_u16(), .body)]
    Api { status: StatusCode, body: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FetchError {
    /// Transport failures go to stderr, everything else to stdout.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}
