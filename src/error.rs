//! Bootstrap error types
//!
//! Defines the errors that can stop the dashboard from starting.

use thiserror::Error;

/// Errors raised while bootstrapping the dashboard
#[derive(Error, Debug)]
pub enum BootError {
    /// No global `window` object (not running in a browser)
    #[error("No global window available")]
    NoWindow,

    /// The window has no document attached
    #[error("Window has no document")]
    NoDocument,

    /// The host page does not contain the mount target
    #[error("Mount target #{0} not found in document")]
    MountTargetMissing(String),

    /// The mount target exists but cannot host a rendered tree
    #[error("Mount target #{0} is not an HTML element")]
    MountTargetNotHtml(String),

    /// Registering a DOM event listener failed
    #[error("Failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },

    /// Serializing a diagnostic report failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for bootstrap operations
pub type BootResult<T> = Result<T, BootError>;
