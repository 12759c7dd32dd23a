//! Injected collaborator interfaces
//!
//! The core never reaches for a global session store; the enclosing session
//! layer hands in narrow read-only views of what it owns. Implementations
//! live outside this crate (session-metadata store, identity provider, host
//! display environment).

/// Fixed key names under which the session-metadata store holds the client
/// identity fields read by the request encoder and the log payload builder.
pub mod keys {
    pub const CLIENT_VERSION: &str = "client_version";
    pub const UI_VERSION: &str = "ui_version";
    pub const BUILD_IDENTIFIER: &str = "build_identifier";
    pub const BROWSER_VERSION: &str = "browser_info_version";
    pub const BROWSER_OS_NAME: &str = "browser_info_os_name";
    pub const BROWSER_OS_VERSION: &str = "browser_info_os_version";
}

/// Read-only view of the external session-metadata store
pub trait SessionMetadata {
    /// Look up a metadata value by its fixed key name
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a metadata value, falling back to `default` when absent
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// External identity provider for the device/session identifier
pub trait DeviceIdentity {
    /// The ESN-equivalent device/session identifier
    fn esn(&self) -> String;
}

/// Host display/browser environment queried by the log payload builder
pub trait HostEnvironment {
    fn user_agent(&self) -> String;

    /// Screen geometry as (width, height) in pixels
    fn screen_size(&self) -> (u32, u32);
}
