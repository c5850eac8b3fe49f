use reqwest::StatusCode;
use thiserror::Error;

/// Failure kinds of a single weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Location must not be empty")]
    InvalidLocation,

    /// The provider answered 400: it could not resolve the location.
    #[error("Location not found")]
    LocationNotFound,

    #[error("Weather provider returned status {status}")]
    ProviderFailure { status: StatusCode },

    /// Network error, timeout or a body that could not be read.
    #[error("Request to weather provider failed: {0}")]
    TransportFailure(#[source] reqwest::Error),

    /// Malformed or incomplete provider payload.
    #[error("Unexpected provider payload: {0}")]
    UnexpectedFailure(String),
}

/// Drops the request URL: its query string carries the provider API key.
impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::TransportFailure(err.without_url())
    }
}

impl WeatherError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedFailure(message.into())
    }

    /// True for failures caused by the caller's input rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidLocation | Self::LocationNotFound)
    }
}
