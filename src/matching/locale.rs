//! Locale and channel-layout normalization
//!
//! Maps raw player-reported language tags and channel counts into the
//! vocabulary the manifest uses for its track entries. Pure functions,
//! no state.

use crate::errors::TelemetryError;

/// Known channel-count to channel-layout-label conversions. Anything outside
/// this table is an error, never a guessed default.
const AUDIO_CHANNELS_CONV: [(u32, &str); 4] =
    [(1, "1.0"), (2, "2.0"), (6, "5.1"), (8, "7.1")];

/// Convert a raw channel count into the service's channel-layout label
/// (e.g. 6 becomes "5.1")
pub fn normalize_channels(raw_channel_count: u32) -> Result<&'static str, TelemetryError> {
    AUDIO_CHANNELS_CONV
        .iter()
        .find(|(count, _)| *count == raw_channel_count)
        .map(|(_, label)| *label)
        .ok_or(TelemetryError::UnsupportedChannelLayout {
            channels: raw_channel_count,
        })
}

/// Normalize a player-reported language tag against the languages the
/// manifest actually declares.
///
/// Candidate order: the raw tag itself, then the base code with any region
/// qualifier stripped ("en-US" collapses to "en"). The first candidate
/// present in `manifest_languages` wins. When neither is declared the raw
/// tag is returned unchanged; this fallback covers the fixed-locale mode
/// where tracks are not locale-remapped.
pub fn normalize_language(raw_tag: &str, manifest_languages: &[&str]) -> String {
    if manifest_languages.contains(&raw_tag) {
        return raw_tag.to_string();
    }
    if let Some((base, _region)) = raw_tag.split_once('-') {
        if manifest_languages.contains(&base) {
            return base.to_string();
        }
    }
    raw_tag.to_string()
}
