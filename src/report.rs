//! Failure reporting boundary for user-triggered operations
//!
//! Operations invoked from the user-facing call path get wrapped here: on
//! failure the error is classified, shown through the presentation
//! collaborator, and handed back unchanged so the caller's error path still
//! executes. The wrapper never swallows a failure and never touches the
//! success path.

use tracing::warn;

use crate::errors::TelemetryError;

/// Presentation hints for an error notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDisplayFlags {
    /// The failure carried no usable message
    pub unknown_error: bool,
    /// The failure originated from the remote service protocol layer
    pub service_error: bool,
}

/// External presentation collaborator showing error dialogs to the user
pub trait ErrorPresenter {
    fn show_error(&self, title: &str, message: &str, flags: ErrorDisplayFlags);
}

/// Run `op`, notifying the presenter on failure before returning the error
/// unchanged.
pub fn with_error_display<T, F>(
    presenter: &dyn ErrorPresenter,
    title: &str,
    op: F,
) -> Result<T, TelemetryError>
where
    F: FnOnce() -> Result<T, TelemetryError>,
{
    match op() {
        Ok(value) => Ok(value),
        Err(error) => {
            let message = error.to_string();
            warn!(%error, "user-facing operation failed");
            presenter.show_error(
                title,
                &message,
                ErrorDisplayFlags {
                    unknown_error: message.is_empty(),
                    service_error: error.is_service_error(),
                },
            );
            Err(error)
        }
    }
}
