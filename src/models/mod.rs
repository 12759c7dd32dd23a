//! Data model for the track-correlation and request-encoding core
//!
//! Everything here is a value object: inputs (player state, manifest) are
//! supplied fresh by the host collaborators and never mutated, outputs
//! (media tag, play times) are constructed per reporting tick, serialized
//! and discarded. The wire-facing structures carry serde renames so that
//! serialization matches the remote service's field names exactly.

use serde::{Deserialize, Serialize};

/// Audio stream the player engine is currently decoding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioStreamDescriptor {
    pub language: String,
    pub channels: u32,
}

/// Video stream the player engine is currently decoding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoStreamDescriptor {
    pub codec: String,
    pub width: u32,
    pub height: u32,
}

/// Subtitle stream the player engine has active, if any. Reported by the
/// host but not yet consumed by matching or change detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubtitleStreamDescriptor {
    pub language: String,
}

/// Snapshot of the locally active playback state, supplied fresh on each
/// reporting tick by the host player engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerState {
    pub current_audio_stream: AudioStreamDescriptor,
    pub current_video_stream: VideoStreamDescriptor,
    pub current_subtitle_stream: Option<SubtitleStreamDescriptor>,
    /// Elapsed playback time in seconds
    pub elapsed_seconds: f64,
}

/// One encoded variant of an audio track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioStream {
    pub downloadable_id: String,
    pub bitrate: u64,
}

/// A logical audio track (one language/channel-layout combination)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioTrack {
    pub language: String,
    /// Channel layout label as the service encodes it, e.g. "5.1"
    pub channels: String,
    pub new_track_id: String,
    pub streams: Vec<AudioStream>,
}

/// One encoded variant of a video track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoStream {
    pub downloadable_id: String,
    /// Codec family tag, may carry profile/level suffixes beyond the codec
    /// name the player reports
    pub content_profile: String,
    pub res_w: u32,
    pub res_h: u32,
}

/// A logical video rendition group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoTrack {
    pub new_track_id: String,
    pub streams: Vec<VideoStream>,
}

/// A timed-text track entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleTrack {
    pub new_track_id: String,
    /// The explicit "subtitles disabled" sentinel track
    #[serde(rename = "isNoneTrack")]
    pub is_none_track: bool,
}

/// Service-provided description of all available stream variants for a title,
/// previously fetched and parsed by the manifest-retrieval collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub audio_tracks: Vec<AudioTrack>,
    pub video_tracks: Vec<VideoTrack>,
    pub timedtexttracks: Vec<SubtitleTrack>,
}

/// Per-stream playback duration entry inside [`PlayTimes`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayTimeEntry {
    #[serde(rename = "downloadableId")]
    pub downloadable_id: String,
    /// Milliseconds
    pub duration: i64,
}

/// The playTimes accounting structure of a telemetry event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayTimes {
    /// Total elapsed milliseconds
    pub total: i64,
    pub audio: Vec<PlayTimeEntry>,
    pub video: Vec<PlayTimeEntry>,
    /// Never populated by current behavior
    pub text: Vec<PlayTimeEntry>,
}

/// Telemetry structure correlating current playback position with the
/// manifest track ids matched for the active streams. Constructed fresh per
/// reporting call, serialized immediately, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaTag {
    #[serde(rename = "playTimes")]
    pub play_times: PlayTimes,
    pub video_track_id: String,
    pub audio_track_id: String,
    pub text_track_id: String,
}
