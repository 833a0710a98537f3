use thiserror::Error;

/// Coarse classification of a failed fetch, independent of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UpstreamStatus,
    DecodeFailure,
    TransportFailure,
}

/// Errors returned by a weather fetch.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider answered with anything other than `200 OK`.
    #[error("weather API returned status: {0}")]
    UpstreamStatus(u16),

    #[error("failed to parse weather data: {0}")]
    Decode(#[from] serde_json::Error),

    /// Connection, DNS or request-level failure.
    #[error("failed to fetch weather: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response: {0}")]
    Body(#[source] reqwest::Error),
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::UpstreamStatus(_) => ErrorKind::UpstreamStatus,
            WeatherError::Decode(_) => ErrorKind::DecodeFailure,
            WeatherError::Transport(_) | WeatherError::Body(_) => ErrorKind::TransportFailure,
        }
    }

    /// Status code carried by an [`ErrorKind::UpstreamStatus`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            WeatherError::UpstreamStatus(code) => Some(*code),
            _ => None,
        }
    }
}
