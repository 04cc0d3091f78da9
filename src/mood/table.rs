use std::collections::HashMap;

use urlencoding::encode;

use super::mapper::normalize_condition;
use crate::error::TableError;
use crate::models::RecommendationEntry;

/// Key of the bucket used when no condition matches
pub const DEFAULT_KEY: &str = "default";

/// Condition key -> songs that fit it.
///
/// Every bucket, including the default one, holds at least one entry.
#[derive(Debug, Clone)]
pub struct PlaylistTable {
    buckets: HashMap<String, Vec<RecommendationEntry>>,
    default: Vec<RecommendationEntry>,
}

impl PlaylistTable {
    /// Build a table from raw buckets. Keys are matched case-insensitively,
    /// and aliased conditions (`mist`, `fog`, ...) are merged into the bucket
    /// they are looked up under.
    pub fn new(raw: HashMap<String, Vec<RecommendationEntry>>) -> Result<Self, TableError> {
        let mut buckets: HashMap<String, Vec<RecommendationEntry>> = HashMap::new();
        for (key, entries) in raw {
            let key = normalize_condition(&key);
            if entries.is_empty() {
                return Err(TableError::EmptyBucket(key));
            }
            buckets.entry(key).or_default().extend(entries);
        }

        let default = buckets.remove(DEFAULT_KEY).ok_or(TableError::MissingDefault)?;

        Ok(PlaylistTable { buckets, default })
    }

    /// Load a table from a JSON object of `"condition": [entries]`
    pub fn load_from_file(path: &str) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)?;
        let raw: HashMap<String, Vec<RecommendationEntry>> = serde_json::from_str(&content)?;
        Self::new(raw)
    }

    /// Entries for `key`, or the default bucket if the key is unknown
    pub fn resolve(&self, key: &str) -> &[RecommendationEntry] {
        self.bucket(key).unwrap_or(self.default.as_slice())
    }

    /// Entries stored under exactly `key`. `"default"` names the fallback bucket.
    pub fn bucket(&self, key: &str) -> Option<&[RecommendationEntry]> {
        if key == DEFAULT_KEY {
            return Some(self.default.as_slice());
        }
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Condition keys, not including the default bucket
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// The table shipped with the application
    pub fn builtin() -> Self {
        let buckets = HashMap::from([
            (
                "clear".to_string(),
                vec![
                    song("Sunny Vibes", "Happy", "Pharrell Williams", "Pop/Energetic"),
                    song("Golden Hour", "Walking on Sunshine", "Katrina and the Waves", "Pop/Rock"),
                    song("Bright Skies", "Here Comes the Sun", "The Beatles", "Classic Rock"),
                ],
            ),
            (
                "clouds".to_string(),
                vec![
                    song("Cloudy Calm", "Sweater Weather", "The Neighbourhood", "Indie/Lo-fi"),
                    song("Drizzle Daydream", "Open", "Rhye", "Chill"),
                    song("Misty Reverie", "Pyramid Song", "Radiohead", "Alternative"),
                    song("Hazy Glow", "Heat Waves", "Glass Animals", "Psychedelic Pop"),
                    song("Foggy Drift", "Holocene", "Bon Iver", "Indie Folk"),
                ],
            ),
            (
                "rain".to_string(),
                vec![
                    song("Melancholic Rain", "Set Fire to the Rain", "Adele", "Melancholic/Jazz"),
                    song("Rainy Window", "Riders on the Storm", "The Doors", "Psychedelic Rock"),
                    song("Wet Streets", "Purple Rain", "Prince", "Rock/Soul"),
                ],
            ),
            (
                "thunderstorm".to_string(),
                vec![
                    song("Stormy", "Thunderstruck", "AC/DC", "Rock/Metal"),
                    song("Electric Skies", "Thunder", "Imagine Dragons", "Alternative Rock"),
                    song("Rolling Thunder", "Lightning Crashes", "Live", "Alternative"),
                ],
            ),
            (
                "snow".to_string(),
                vec![
                    song("Snowy", "Let It Snow! Let It Snow! Let It Snow!", "Frank Sinatra", "Classic/Jazz"),
                    song("Winter Hush", "Winter Song", "Sara Bareilles", "Acoustic"),
                    song("Frozen Quiet", "Snow (Hey Oh)", "Red Hot Chili Peppers", "Alternative Rock"),
                ],
            ),
        ]);

        let default = vec![
            song("Unknown Mood", "Three Little Birds", "Bob Marley", "Reggae"),
            song("Wildcard", "Don't Stop Me Now", "Queen", "Rock"),
            song("Open Road", "Lovely Day", "Bill Withers", "Soul"),
        ];

        PlaylistTable { buckets, default }
    }
}

/// Builtin entry linking to a streaming search for the track
fn song(mood: &str, title: &str, artist: &str, genre: &str) -> RecommendationEntry {
    let link = format!(
        "https://open.spotify.com/search/{}",
        encode(&format!("{title} {artist}"))
    );
    RecommendationEntry::new(mood, title, artist, genre, &link)
}
