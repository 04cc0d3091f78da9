use rand::Rng;

use super::PlaylistTable;
use crate::models::RecommendationEntry;

/// Provider categories that share a bucket with another category
pub const CONDITION_ALIASES: &[(&str, &str)] = &[
    ("drizzle", "clouds"),
    ("mist", "clouds"),
    ("fog", "clouds"),
    ("haze", "clouds"),
];

/// Lowercase a provider condition and fold aliases onto their table key
pub fn normalize_condition(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    CONDITION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, key)| key.to_string())
        .unwrap_or(lowered)
}

/// Picks a song for a weather condition
pub struct MoodMapper<'a> {
    table: &'a PlaylistTable,
}

impl<'a> MoodMapper<'a> {
    pub fn new(table: &'a PlaylistTable) -> Self {
        Self { table }
    }

    /// Recommend one entry for `raw_condition`, drawing uniformly from its bucket.
    /// Unknown conditions draw from the default bucket.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        raw_condition: &str,
        rng: &mut R,
    ) -> &'a RecommendationEntry {
        let key = normalize_condition(raw_condition);
        let bucket = self.table.resolve(&key);
        // Buckets are never empty, PlaylistTable enforces it on construction
        let index = rng.gen_range(0..bucket.len());
        tracing::debug!(condition = raw_condition, key = %key, index, "selected recommendation");
        &bucket[index]
    }
}
