//! Media-tag assembly and the change-detection gate
//!
//! One reporting tick: the caller hands in the current player-state snapshot
//! and the previously fetched manifest, and gets back the wire-shaped
//! [`MediaTag`] correlating playback position with the matched track ids.

use tracing::debug;

use crate::errors::TelemetryError;
use crate::matching::{find_audio, find_subtitle, find_video};
use crate::models::{Manifest, MediaTag, PlayTimeEntry, PlayTimes, PlayerState};

/// Build the playTimes and track-id data for the current playback position.
///
/// `position` is the playback position in milliseconds. The reported
/// duration is `position - 1`; the remote service's accounting expects the
/// subtracted value, so this offset must stay as-is. Any matcher failure
/// propagates unchanged and no partial tag is ever returned.
pub fn build_media_tag(
    player_state: &PlayerState,
    manifest: &Manifest,
    position: i64,
) -> Result<MediaTag, TelemetryError> {
    let audio = find_audio(&player_state.current_audio_stream, manifest)?;
    let video = find_video(&player_state.current_video_stream, manifest)?;
    let text_track_id = find_subtitle(manifest)?;

    let duration = position - 1;
    debug!(
        audio_track_id = %audio.track_id,
        video_track_id = %video.track_id,
        %text_track_id,
        duration,
        "built media tag"
    );

    Ok(MediaTag {
        play_times: PlayTimes {
            total: duration,
            audio: vec![PlayTimeEntry {
                downloadable_id: audio.downloadable_id,
                duration,
            }],
            video: vec![PlayTimeEntry {
                downloadable_id: video.downloadable_id,
                duration,
            }],
            text: vec![],
        },
        video_track_id: video.track_id,
        audio_track_id: audio.track_id,
        text_track_id,
    })
}

/// Refresh the duration values of an existing playTimes structure from the
/// player's current elapsed time. Used between full tag rebuilds, e.g. for
/// keep-alive events.
pub fn update_play_times_duration(play_times: &mut PlayTimes, player_state: &PlayerState) {
    let duration = (player_state.elapsed_seconds * 1000.0) as i64;
    play_times.total = duration;
    if let Some(entry) = play_times.audio.first_mut() {
        entry.duration = duration;
    }
    if let Some(entry) = play_times.video.first_mut() {
        entry.duration = duration;
    }
}

/// Whether the player state changed enough to warrant rebuilding the media
/// tag. Always true when there is no previous snapshot. Subtitle changes are
/// not tracked yet and never trigger a report on their own.
pub fn should_report(previous_state: Option<&PlayerState>, current_state: &PlayerState) -> bool {
    match previous_state {
        None => true,
        Some(previous) => {
            previous.current_audio_stream != current_state.current_audio_stream
                || previous.current_video_stream != current_state.current_video_stream
        }
    }
}
