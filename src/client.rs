use crate::config::Config;
use crate::error::{ConfigurationError, FetchError, TransportError};
use crate::models::{CurrentWeatherResponse, WeatherObservation};
use ureq::Agent;
use urlencoding::encode;

/// Status line and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking HTTP GET. Non-2xx statuses are returned as responses, not errors.
#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Transport backed by a `ureq` agent with its default timeouts
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        UreqTransport {
            agent: Agent::new(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        match self.agent.get(url).call() {
            Ok(response) => {
                let status = response.status();
                let body = response
                    .into_string()
                    .map_err(|e| TransportError(format!("failed to read body: {e}")))?;
                Ok(HttpResponse { status, body })
            }
            Err(ureq::Error::Status(status, response)) => Ok(HttpResponse {
                status,
                body: response.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(transport)) => Err(TransportError(transport.to_string())),
        }
    }
}

/// Client for the current-conditions endpoint of the weather provider
pub struct WeatherClient<'a, T: HttpTransport = UreqTransport> {
    config: &'a Config,
    transport: T,
}

impl<'a> WeatherClient<'a, UreqTransport> {
    /// Create a client that talks to the network through `ureq`
    pub fn new(config: &'a Config) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<'a, T: HttpTransport> WeatherClient<'a, T> {
    pub fn with_transport(config: &'a Config, transport: T) -> Self {
        WeatherClient { config, transport }
    }

    /// Fetch current weather for `place`.
    ///
    /// Returns `Ok(None)` when the place is unknown or the lookup failed for
    /// any reason other than missing configuration. The underlying cause is
    /// logged but not returned.
    pub fn fetch(&self, place: &str) -> Result<Option<WeatherObservation>, ConfigurationError> {
        match self.try_fetch(place) {
            Ok(observation) => Ok(Some(observation)),
            Err(FetchError::MissingApiKey) => Err(ConfigurationError),
            Err(FetchError::NotFound) => {
                tracing::info!(place, "provider does not know this place");
                Ok(None)
            }
            Err(FetchError::EmptyQuery) => {
                tracing::debug!("skipping lookup for empty place name");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(place, error = %e, "weather lookup failed");
                Ok(None)
            }
        }
    }

    /// Fetch current weather for `place`, keeping the detailed failure cause
    pub fn try_fetch(&self, place: &str) -> Result<WeatherObservation, FetchError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(FetchError::MissingApiKey)?;

        let place = place.trim();
        if place.is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let url = format!(
            "{}?q={}&appid={}&units=metric&lang=en",
            self.config.endpoint,
            encode(place),
            encode(api_key)
        );

        tracing::debug!(place, endpoint = %self.config.endpoint, "requesting current weather");
        let response = self.transport.get(&url)?;

        match response.status {
            200 => {
                let parsed: CurrentWeatherResponse = serde_json::from_str(&response.body)
                    .map_err(|e| FetchError::Malformed(e.to_string()))?;
                parsed
                    .into_observation()
                    .ok_or_else(|| FetchError::Malformed("no weather entries".to_string()))
            }
            404 => Err(FetchError::NotFound),
            status => Err(FetchError::Status(status)),
        }
    }
}
