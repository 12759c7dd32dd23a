//! Error type definitions for the playtrack core
//!
//! All failures in this layer are local-computation failures (no I/O is
//! performed here), so every error is surfaced to the caller unchanged.
//! "No match" is an expected outcome during playback reporting and is
//! modelled as an error variant rather than a panic.

use thiserror::Error;

/// Media kind a matcher operates on, used to qualify `TrackNotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
    Subtitle,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Audio => write!(f, "audio"),
            MediaKind::Video => write!(f, "video"),
            MediaKind::Subtitle => write!(f, "subtitle"),
        }
    }
}

/// Top-level error type for the track-correlation and request-encoding core
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// No manifest entry matches current playback criteria. The manifest is
    /// stale or the player state is inconsistent; the caller should refresh
    /// the manifest or abort reporting for this tick.
    #[error("no {kind} track matches current playback: {criteria}")]
    TrackNotFound { kind: MediaKind, criteria: String },

    /// The player reported a channel count outside the known layout table.
    /// Never defaulted.
    #[error("unsupported audio channel layout: {channels} channels")]
    UnsupportedChannelLayout { channels: u32 },

    /// A failure originating from the remote service protocol layer,
    /// distinguished from the other variants only for presentation purposes.
    #[error("service error: {message}")]
    Service { message: String },

    /// Payload serialization failures
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TelemetryError {
    /// Create a track-not-found error for a specific media kind
    pub fn track_not_found<C: Into<String>>(kind: MediaKind, criteria: C) -> Self {
        Self::TrackNotFound {
            kind,
            criteria: criteria.into(),
        }
    }

    /// Create a service error with a custom message
    pub fn service<M: Into<String>>(message: M) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    /// Whether this error came from the remote service protocol layer.
    /// Only affects how the error is presented, never control flow.
    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::Service { .. })
    }
}
