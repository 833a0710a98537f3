use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt::Debug;

use crate::{envelope::WeatherEnvelope, error::WeatherError, model::WeatherRecord};

/// Public wttr.in endpoint; needs no API key.
pub const DEFAULT_BASE_URL: &str = "https://wttr.in";

/// Location used when the caller passes an empty string.
pub const DEFAULT_LOCATION: &str = "Istanbul";

#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_weather(&self, location: &str) -> Result<WeatherRecord, WeatherError>;
}

/// Client for the wttr.in JSON (`format=j1`) API.
#[derive(Debug, Clone)]
pub struct WttrClient {
    base_url: String,
    http: Client,
}

impl Default for WttrClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl WttrClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for `location`, with empty input replaced by [`DEFAULT_LOCATION`].
    pub fn request_url(&self, location: &str) -> String {
        let location = if location.is_empty() { DEFAULT_LOCATION } else { location };

        format!(
            "{}/{}?format=j1",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(location)
        )
    }
}

#[async_trait]
impl WeatherSource for WttrClient {
    async fn fetch_weather(&self, location: &str) -> Result<WeatherRecord, WeatherError> {
        let url = self.request_url(location);
        tracing::debug!(%url, "requesting weather");

        let res = self.http.get(&url).send().await.map_err(|err| {
            tracing::warn!(%url, error = %err, "weather request failed");
            WeatherError::Transport(err)
        })?;

        let status = res.status();
        tracing::debug!(%url, %status, "weather response");

        if status != StatusCode::OK {
            tracing::warn!(%url, %status, "unexpected weather status");
            return Err(WeatherError::UpstreamStatus(status.as_u16()));
        }

        let body = res.bytes().await.map_err(WeatherError::Body)?;
        let envelope: WeatherEnvelope = serde_json::from_slice(&body)?;

        Ok(envelope.into())
    }
}
