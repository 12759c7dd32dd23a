//! Stream matching against the content manifest
//!
//! For each media kind this module searches the manifest's track lists for
//! the entry matching current playback criteria. All three matchers are pure
//! functions over immutable inputs; a failed match is an expected outcome
//! and comes back as `TrackNotFound`, never a panic.

use tracing::{debug, trace};

use crate::errors::{MediaKind, TelemetryError};
use crate::models::{AudioStreamDescriptor, Manifest, VideoStreamDescriptor};

pub mod locale;

pub use locale::{normalize_channels, normalize_language};

/// A matched stream variant: the addressable stream id plus the id of the
/// logical track it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamMatch {
    pub downloadable_id: String,
    pub track_id: String,
}

/// Find the audio stream variant matching the player's active audio stream.
///
/// The player language and channel count are normalized into manifest
/// vocabulary first. Audio tracks are scanned in manifest order; a track
/// matches when both its language and its channel label are equal to the
/// normalized values. If several tracks carry the same combination the
/// first one wins. Within the matching track the stream with the highest
/// bitrate is selected, ties broken by listed order.
pub fn find_audio(
    player_audio: &AudioStreamDescriptor,
    manifest: &Manifest,
) -> Result<StreamMatch, TelemetryError> {
    let languages: Vec<&str> = manifest
        .audio_tracks
        .iter()
        .map(|track| track.language.as_str())
        .collect();
    let language = locale::normalize_language(&player_audio.language, &languages);
    let channels = locale::normalize_channels(player_audio.channels)?;

    for audio_track in &manifest.audio_tracks {
        if audio_track.language == language && audio_track.channels == channels {
            let stream = audio_track
                .streams
                .iter()
                .max_by_key(|stream| stream.bitrate)
                .ok_or_else(|| {
                    TelemetryError::track_not_found(
                        MediaKind::Audio,
                        format!("track {} has no streams", audio_track.new_track_id),
                    )
                })?;
            trace!(
                downloadable_id = %stream.downloadable_id,
                track_id = %audio_track.new_track_id,
                bitrate = stream.bitrate,
                "matched audio stream"
            );
            return Ok(StreamMatch {
                downloadable_id: stream.downloadable_id.clone(),
                track_id: audio_track.new_track_id.clone(),
            });
        }
    }

    debug!(%language, %channels, "no audio track matched current playback");
    Err(TelemetryError::track_not_found(
        MediaKind::Audio,
        format!("language: {language}, channels: {channels}"),
    ))
}

/// Find the video stream variant matching the player's active video stream.
///
/// Tracks are scanned in manifest order, streams within a track in listed
/// order; the first stream whose `content_profile` contains the reported
/// codec as a substring and whose resolution equals the reported resolution
/// exactly is returned. Substring matching on the profile is deliberate:
/// the service encodes profile variants (level suffixes and the like) that
/// are not present in the player's codec string.
pub fn find_video(
    player_video: &VideoStreamDescriptor,
    manifest: &Manifest,
) -> Result<StreamMatch, TelemetryError> {
    let codec = &player_video.codec;
    let width = player_video.width;
    let height = player_video.height;

    for video_track in &manifest.video_tracks {
        for stream in &video_track.streams {
            if stream.content_profile.contains(codec.as_str())
                && stream.res_w == width
                && stream.res_h == height
            {
                trace!(
                    downloadable_id = %stream.downloadable_id,
                    track_id = %video_track.new_track_id,
                    content_profile = %stream.content_profile,
                    "matched video stream"
                );
                return Ok(StreamMatch {
                    downloadable_id: stream.downloadable_id.clone(),
                    track_id: video_track.new_track_id.clone(),
                });
            }
        }
    }

    debug!(%codec, width, height, "no video stream matched current playback");
    Err(TelemetryError::track_not_found(
        MediaKind::Video,
        format!("codec: {codec}, width: {width}, height: {height}"),
    ))
}

/// Find the subtitle track id to report.
///
/// Subtitle selection by language/format is not implemented yet; this always
/// returns the first "disabled subtitles" sentinel track.
// TODO: match timed-text tracks by language and format once the player
//       reports the active subtitle stream
pub fn find_subtitle(manifest: &Manifest) -> Result<String, TelemetryError> {
    manifest
        .timedtexttracks
        .iter()
        .find(|sub_track| sub_track.is_none_track)
        .map(|sub_track| sub_track.new_track_id.clone())
        .ok_or_else(|| {
            TelemetryError::track_not_found(MediaKind::Subtitle, "no disabled-subtitles track")
        })
}
