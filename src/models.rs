use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Current conditions for a place, as reported by the weather provider
#[derive(Debug, Clone, Serialize)]
pub struct WeatherObservation {
    pub condition: String, // Provider category, e.g. "Rain" or "Clouds"
    pub description: String,
    pub temperature_c: f64,
    pub place: Option<String>, // Place name as resolved by the provider
    pub fetched_at: DateTime<Local>,
}

/// One song suggestion attached to a weather mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub mood: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub link: String,
}

impl RecommendationEntry {
    pub fn new(mood: &str, title: &str, artist: &str, genre: &str, link: &str) -> Self {
        RecommendationEntry {
            mood: mood.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            link: link.to_string(),
        }
    }
}

/// Response structure for the current weather API call
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub weather: Vec<WeatherSummary>,
    pub main: MainReadings,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherSummary {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

impl CurrentWeatherResponse {
    /// Convert the raw response into an observation, using the first weather entry.
    /// Returns `None` when the provider sent no weather entries.
    pub fn into_observation(self) -> Option<WeatherObservation> {
        let primary = self.weather.into_iter().next()?;
        Some(WeatherObservation {
            condition: primary.main,
            description: primary.description,
            temperature_c: self.main.temp,
            place: self.name.filter(|name| !name.is_empty()),
            fetched_at: Local::now(),
        })
    }
}
