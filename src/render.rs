use serde::Serialize;

use crate::models::{RecommendationEntry, WeatherObservation};

/// Helper trait for string formatting
pub trait ToTitleCase {
    fn to_title_case(&self) -> String;
}

impl ToTitleCase for str {
    fn to_title_case(&self) -> String {
        self.split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Everything shown to the user for one lookup
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub location: &'a str,
    pub observation: &'a WeatherObservation,
    pub recommendation: &'a RecommendationEntry,
}

impl<'a> Report<'a> {
    pub fn new(
        location: &'a str,
        observation: &'a WeatherObservation,
        recommendation: &'a RecommendationEntry,
    ) -> Self {
        Report {
            location,
            observation,
            recommendation,
        }
    }

    /// One-line weather summary
    pub fn weather_line(&self) -> String {
        format!(
            "Location: {} | Status: {} | Temp: {}",
            self.location.to_uppercase(),
            self.observation.description.to_title_case(),
            format_temperature(self.observation.temperature_c)
        )
    }

    /// Full multi-line text report
    pub fn to_text(&self) -> String {
        let entry = self.recommendation;
        let mut lines = vec![
            "📡 Weather Report".to_string(),
            self.weather_line(),
        ];
        if let Some(place) = &self.observation.place {
            if !place.eq_ignore_ascii_case(self.location.trim()) {
                lines.push(format!("Resolved as: {place}"));
            }
        }
        lines.push(format!(
            "Observed at: {}",
            self.observation.fetched_at.format("%Y-%m-%d %H:%M")
        ));
        lines.push(String::new());
        lines.push("🎧 Recommendation".to_string());
        lines.push(format!("Current Mood:    {}", entry.mood));
        lines.push(format!("Suggested Genre: {}", entry.genre));
        lines.push(format!("Now Playing:     {} - {}", entry.title, entry.artist));
        lines.push(format!("Listen:          {}", entry.link));
        lines.join("\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Failure shown in place of a [`Report`] when output is JSON
#[derive(Debug, Serialize)]
pub struct ErrorReport<'a> {
    pub location: &'a str,
    pub error: &'a str, // "not_found" or "configuration"
    pub message: String,
}

impl<'a> ErrorReport<'a> {
    pub fn not_found(location: &'a str) -> Self {
        ErrorReport {
            location,
            error: "not_found",
            message: not_found_message(location),
        }
    }

    pub fn configuration(location: &'a str, message: String) -> Self {
        ErrorReport {
            location,
            error: "configuration",
            message,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Temperature with one decimal and the Celsius sign, e.g. `14.2°C`
pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}

/// Message shown when no weather could be found for `location`
pub fn not_found_message(location: &str) -> String {
    format!("Could not find weather data for '{location}'. Please check the spelling.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn observation(description: &str, temp: f64, place: Option<&str>) -> WeatherObservation {
        WeatherObservation {
            condition: "Rain".to_string(),
            description: description.to_string(),
            temperature_c: temp,
            place: place.map(str::to_string),
            fetched_at: Local::now(),
        }
    }

    fn entry() -> RecommendationEntry {
        RecommendationEntry::new(
            "Melancholic Rain",
            "Set Fire to the Rain",
            "Adele",
            "Melancholic/Jazz",
            "https://open.spotify.com/search/Set%20Fire%20to%20the%20Rain%20Adele",
        )
    }

    #[test]
    fn test_title_case() {
        assert_eq!("light rain".to_title_case(), "Light Rain");
        assert_eq!("OVERCAST   clouds".to_title_case(), "Overcast Clouds");
        assert_eq!("".to_title_case(), "");
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(14.2), "14.2°C");
        assert_eq!(format_temperature(9.0), "9.0°C");
        assert_eq!(format_temperature(-3.456), "-3.5°C");
    }

    #[test]
    fn test_weather_line() {
        let obs = observation("light rain", 14.2, Some("London"));
        let rec = entry();
        let report = Report::new("London", &obs, &rec);
        assert_eq!(
            report.weather_line(),
            "Location: LONDON | Status: Light Rain | Temp: 14.2°C"
        );
    }

    #[test]
    fn test_text_report_lists_track_details() {
        let obs = observation("light rain", 14.2, Some("London"));
        let rec = entry();
        let text = Report::new("london", &obs, &rec).to_text();

        assert!(text.contains("Current Mood:    Melancholic Rain"));
        assert!(text.contains("Suggested Genre: Melancholic/Jazz"));
        assert!(text.contains("Now Playing:     Set Fire to the Rain - Adele"));
        assert!(text.contains(&rec.link));
        assert!(!text.contains("Resolved as"));
    }

    #[test]
    fn test_text_report_mentions_resolved_place() {
        let obs = observation("mist", 9.0, Some("Istanbul"));
        let rec = entry();
        let text = Report::new("istanbul ist", &obs, &rec).to_text();
        assert!(text.contains("Resolved as: Istanbul"));
    }

    #[test]
    fn test_json_report() {
        let obs = observation("light rain", 14.2, None);
        let rec = entry();
        let json = Report::new("London", &obs, &rec).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["location"], "London");
        assert_eq!(value["observation"]["condition"], "Rain");
        assert_eq!(value["recommendation"]["artist"], "Adele");
    }

    #[test]
    fn test_not_found_error_json() {
        let json = ErrorReport::not_found("Qwxyzplace").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["location"], "Qwxyzplace");
        assert_eq!(value["error"], "not_found");
        assert_eq!(value["message"], not_found_message("Qwxyzplace"));
        assert!(value.get("recommendation").is_none());
    }

    #[test]
    fn test_configuration_error_json() {
        let report = ErrorReport::configuration("London", "API Key not found".to_string());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["error"], "configuration");
        assert_eq!(value["message"], "API Key not found");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            not_found_message("Qwxyzplace"),
            "Could not find weather data for 'Qwxyzplace'. Please check the spelling."
        );
    }
}
