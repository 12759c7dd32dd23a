//! # playtrack
//!
//! Track correlation and request encoding for a session client talking to a
//! remote adaptive-streaming service. Given the locally active playback
//! state and a previously fetched content manifest, this crate identifies
//! which manifest-declared stream variants match current playback and emits
//! protocol-correct payloads for telemetry and license-continuation
//! requests. It also owns the canonical encoding of outbound request
//! parameters for all protocol operations.
//!
//! The crate performs no I/O: player state, manifest, session metadata and
//! the presentation surface are injected by the enclosing session layer, and
//! the finished payloads are handed back for the transport to send.

pub mod errors;
pub mod logblob;
pub mod matching;
pub mod models;
pub mod report;
pub mod request;
pub mod session;
pub mod telemetry;

pub use errors::{MediaKind, TelemetryError};
pub use logblob::{generate_bootstrap_log, LogBlobPayload};
pub use matching::{find_audio, find_subtitle, find_video, StreamMatch};
pub use models::{Manifest, MediaTag, PlayTimes, PlayerState};
pub use report::{with_error_display, ErrorDisplayFlags, ErrorPresenter};
pub use request::{create_req_params, Endpoint, RequestParams};
pub use session::{DeviceIdentity, HostEnvironment, SessionMetadata};
pub use telemetry::{build_media_tag, should_report, update_play_times_duration};
