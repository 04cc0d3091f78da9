/// Default OpenWeatherMap current-conditions endpoint
pub const DEFAULT_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key. Absence is reported by the weather client, not here.
    pub api_key: Option<String>,
    pub endpoint: String,
}

impl Config {
    pub fn new(api_key: Option<String>, endpoint: Option<String>) -> Self {
        Config {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            endpoint: endpoint
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Config {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    let api_key = std::env::var("OPENWEATHER_API_KEY").ok();
    let endpoint = std::env::var("OPENWEATHER_ENDPOINT").ok();
    Config::new(api_key, endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_treated_as_missing() {
        let config = Config::new(Some("   ".to_string()), None);
        assert!(config.api_key.is_none());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_endpoint_override() {
        let config = Config::new(
            Some("abc123".to_string()),
            Some("http://localhost:8080/weather".to_string()),
        );
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.endpoint, "http://localhost:8080/weather");
    }
}
