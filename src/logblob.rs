//! Bootstrap diagnostic log payload
//!
//! One log record is submitted when a session profile is first entered.
//! The outer transport re-encodes the payload string, so the serialized
//! record goes through a two-stage escape transform (quote-escaping, then
//! space-stripping with `#` standing in for the spaces that must survive).
//! Fields the client cannot source honestly are left out entirely rather
//! than filled with made-up values.

use chrono::Utc;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::TelemetryError;
use crate::session::{keys, DeviceIdentity, HostEnvironment, SessionMetadata};

/// One bootstrap log record. Field declaration order is serialization order.
#[derive(Debug, Serialize)]
struct BootstrapLogRecord {
    browserua: String,
    browserhref: String,
    screensize: String,
    screenavailsize: String,
    clientsize: String,
    #[serde(rename = "type")]
    record_type: String,
    sev: String,
    devmod: String,
    clver: String,
    osplatform: String,
    osver: String,
    browsername: String,
    browserver: String,
    #[serde(rename = "appLogSeqNum")]
    app_log_seq_num: u32,
    #[serde(rename = "uniqueLogId")]
    unique_log_id: String,
    #[serde(rename = "appId")]
    app_id: i64,
    esn: String,
    lver: String,
    clienttime: i64,
    client_utc: i64,
    uiver: String,
}

#[derive(Debug, Serialize)]
struct LogRecordContainer {
    entries: Vec<BootstrapLogRecord>,
}

/// Pre-escaped log submission payload, handed as-is to the log transport
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogBlobPayload {
    pub logblobs: String,
}

/// Collision-tolerant correlation number shared by the log requests of one
/// session. Not a strict sequence.
pub fn generate_app_id(now_seconds: i64) -> i64 {
    now_seconds * 10000 + fastrand::i64(1..=10001)
}

/// Apply the transport escape transform to a serialized record.
///
/// Quotes are escaped first, then every remaining space is stripped and each
/// `#` marker is turned back into a space. The record must therefore encode
/// the spaces it wants to keep as `#` before serialization (the user agent
/// does this).
fn escape_for_transport(serialized: &str) -> String {
    serialized
        .replace('"', "\\\"")
        .replace(' ', "")
        .replace('#', " ")
}

/// Build the one-shot diagnostic log payload sent on session bootstrap.
pub fn generate_bootstrap_log(
    metadata: &dyn SessionMetadata,
    identity: &dyn DeviceIdentity,
    host: &dyn HostEnvironment,
) -> Result<LogBlobPayload, TelemetryError> {
    let (screen_width, screen_height) = host.screen_size();
    let screen_size = format!("{screen_width}x{screen_height}");
    let timestamp_utc = Utc::now();
    let timestamp_ms = timestamp_utc.timestamp_millis();
    let unique_log_id = Uuid::new_v4().to_string();
    let app_id = generate_app_id(timestamp_utc.timestamp());

    let record = BootstrapLogRecord {
        browserua: host.user_agent().replace(' ', "#"),
        browserhref: "https://www.netflix.com/browse".to_string(),
        screensize: screen_size.clone(),
        screenavailsize: screen_size.clone(),
        clientsize: screen_size,
        record_type: "startup".to_string(),
        sev: "info".to_string(),
        devmod: "chrome-cadmium".to_string(),
        clver: metadata.get_or(keys::CLIENT_VERSION, ""),
        osplatform: metadata.get_or(keys::BROWSER_OS_NAME, ""),
        osver: metadata.get_or(keys::BROWSER_OS_VERSION, ""),
        browsername: "Chrome".to_string(),
        browserver: metadata.get_or(keys::BROWSER_VERSION, ""),
        app_log_seq_num: 0,
        unique_log_id,
        app_id,
        esn: identity.esn(),
        lver: String::new(),
        clienttime: timestamp_ms,
        client_utc: timestamp_utc.timestamp(),
        uiver: metadata.get_or(keys::UI_VERSION, ""),
    };

    let container = LogRecordContainer {
        entries: vec![record],
    };
    let serialized = serde_json::to_string(&container)?;
    debug!(app_id, "generated bootstrap log payload");

    Ok(LogBlobPayload {
        logblobs: escape_for_transport(&serialized),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::{FixedHost, FixedIdentity, MapMetadata};
    use std::collections::HashMap;

    const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/84.0";

    fn collaborators() -> (MapMetadata, FixedIdentity, FixedHost) {
        (
            MapMetadata(HashMap::from([
                ("client_version", "6.0021.220.051"),
                ("ui_version", "shakti-v1"),
                ("browser_info_version", "84.0.4147.136"),
                ("browser_info_os_name", "Windows"),
                ("browser_info_os_version", "10.0"),
            ])),
            FixedIdentity("NFCDCH-02-TESTESN0123456789"),
            FixedHost {
                user_agent: USER_AGENT,
                screen: (1920, 1080),
            },
        )
    }

    /// Reverse of the transport escape transform
    fn unescape_from_transport(escaped: &str) -> String {
        escaped.replace(' ', "#").replace("\\\"", "\"")
    }

    #[test]
    fn test_escape_round_trip() {
        // Compact JSON carries no literal spaces, so stripping is lossless
        // and the reverse transform reconstructs the serialized form exactly
        let serialized = r#"{"browserua":"Mozilla/5.0#(Windows)","sev":"info"}"#;
        let escaped = escape_for_transport(serialized);

        assert_eq!(
            escaped,
            "{\\\"browserua\\\":\\\"Mozilla/5.0 (Windows)\\\",\\\"sev\\\":\\\"info\\\"}"
        );
        assert_eq!(unescape_from_transport(&escaped), serialized);
    }

    #[test]
    fn test_bootstrap_log_field_content() {
        let (metadata, identity, host) = collaborators();
        let payload = generate_bootstrap_log(&metadata, &identity, &host).unwrap();

        let decoded = unescape_from_transport(&payload.logblobs);
        let value: serde_json::Value = serde_json::from_str(&decoded).unwrap();
        let entry = &value["entries"][0];

        assert_eq!(entry["browserua"], USER_AGENT.replace(' ', "#"));
        assert_eq!(entry["browserhref"], "https://www.netflix.com/browse");
        assert_eq!(entry["screensize"], "1920x1080");
        assert_eq!(entry["clientsize"], "1920x1080");
        assert_eq!(entry["type"], "startup");
        assert_eq!(entry["sev"], "info");
        assert_eq!(entry["devmod"], "chrome-cadmium");
        assert_eq!(entry["clver"], "6.0021.220.051");
        assert_eq!(entry["osplatform"], "Windows");
        assert_eq!(entry["browsername"], "Chrome");
        assert_eq!(entry["appLogSeqNum"], 0);
        assert_eq!(entry["esn"], "NFCDCH-02-TESTESN0123456789");
        assert_eq!(entry["lver"], "");
        assert_eq!(entry["uiver"], "shakti-v1");
    }

    #[test]
    fn test_bootstrap_log_escaping_restores_user_agent_spaces() {
        let (metadata, identity, host) = collaborators();
        let payload = generate_bootstrap_log(&metadata, &identity, &host).unwrap();

        // After escaping, the only spaces in the payload are the user-agent
        // spaces restored from their # markers
        assert!(payload.logblobs.contains("Mozilla/5.0 (Windows NT 10.0; Win64; x64)"));
        assert!(!payload.logblobs.contains('#'));
    }

    #[test]
    fn test_bootstrap_log_correlation_fields() {
        let (metadata, identity, host) = collaborators();
        let payload = generate_bootstrap_log(&metadata, &identity, &host).unwrap();

        let decoded = unescape_from_transport(&payload.logblobs);
        let value: serde_json::Value = serde_json::from_str(&decoded).unwrap();
        let entry = &value["entries"][0];

        let unique_log_id = entry["uniqueLogId"].as_str().unwrap();
        assert!(uuid::Uuid::parse_str(unique_log_id).is_ok());

        let app_id = entry["appId"].as_i64().unwrap();
        let client_utc = entry["client_utc"].as_i64().unwrap();
        assert_eq!(entry["clienttime"].as_i64().unwrap() / 1000, client_utc);
        let random_part = app_id - client_utc * 10000;
        assert!((1..=10001).contains(&random_part));
    }

    #[test]
    fn test_app_id_random_component_range() {
        for _ in 0..100 {
            let app_id = generate_app_id(1_600_000_000);
            let random_part = app_id - 1_600_000_000 * 10000;
            assert!((1..=10001).contains(&random_part));
        }
    }
}
