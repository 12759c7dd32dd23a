//! Ordered request-parameter encoding for the protocol operations
//!
//! The remote service reads these parameters positionally in its logs and
//! compatibility checks, so field order is part of the wire contract. The
//! encoder keeps an ordered list of (name, value) pairs and renders it as a
//! percent-encoded query string verbatim.

use crate::session::{keys, SessionMetadata};

const BASE_URL: &str = "https://www.netflix.com/nq/msl_v1/cadmium/";
const PLAYAPI_URL: &str = "https://www.netflix.com/msl/playapi/cadmium/";

/// Protocol operations this core encodes requests for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Legacy manifest router
    ManifestV1,
    /// Licensed manifest fetch
    Manifest,
    License,
    Events,
    LogBlobs,
}

impl Endpoint {
    /// Full request URL for this operation
    pub fn url(&self) -> String {
        match self {
            // "pbo_manifests/^1.0.0/router" with the caret pre-encoded
            Endpoint::ManifestV1 => format!("{BASE_URL}pbo_manifests/%5E1.0.0/router"),
            Endpoint::Manifest => format!("{PLAYAPI_URL}licensedmanifest"),
            Endpoint::License => format!("{BASE_URL}pbo_licenses/%5E1.0.0/router"),
            Endpoint::Events => format!("{PLAYAPI_URL}event/1"),
            Endpoint::LogBlobs => format!("{PLAYAPI_URL}logblob/1"),
        }
    }
}

/// Playback event names used as `reqName` values under [`Endpoint::Events`]
pub mod events {
    /// Video starts
    pub const START: &str = "start";
    /// Video stops
    pub const STOP: &str = "stop";
    /// Periodic progress update
    pub const KEEP_ALIVE: &str = "keepAlive";
    /// After user interaction (before stop, on skip, on pause)
    pub const ENGAGE: &str = "engage";
    pub const BIND: &str = "bind";
}

/// Ordered query-parameter list for one outbound request.
///
/// Built once per request and never reused: `reqAttempt` starts empty and is
/// filled in by the transport layer when it knows the attempt number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    fields: Vec<(&'static str, String)>,
}

impl RequestParams {
    /// The fields in wire order
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Fill in the attempt counter the transport tracks
    pub fn set_req_attempt(&mut self, attempt: u32) {
        if let Some(field) = self.fields.iter_mut().find(|(name, _)| *name == "reqAttempt") {
            field.1 = attempt.to_string();
        }
    }

    /// Render as a `?`-prefixed, percent-encoded query string, preserving
    /// field order verbatim.
    pub fn to_query_string(&self) -> String {
        let encoded: Vec<String> = self
            .fields
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

/// Create the ordered parameter list for a protocol operation.
///
/// `request_name` is the operation name as the service expects it, e.g.
/// `"events/engage"`. Client-identity fields come from the injected
/// session-metadata view; browser version and OS name are lower-cased on the
/// wire.
pub fn create_req_params(request_name: &str, metadata: &dyn SessionMetadata) -> RequestParams {
    RequestParams {
        fields: vec![
            ("reqAttempt", String::new()),
            ("reqName", request_name.to_string()),
            ("clienttype", "akira".to_string()),
            ("uiversion", metadata.get_or(keys::BUILD_IDENTIFIER, "")),
            ("browsername", "chrome".to_string()),
            (
                "browserversion",
                metadata.get_or(keys::BROWSER_VERSION, "").to_lowercase(),
            ),
            (
                "osname",
                metadata.get_or(keys::BROWSER_OS_NAME, "").to_lowercase(),
            ),
            ("osversion", metadata.get_or(keys::BROWSER_OS_VERSION, "")),
        ],
    }
}
