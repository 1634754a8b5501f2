use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced by the device capture ports.
///
/// Both variants degrade to an inline message in the presenter; neither is
/// fatal and nothing is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureError {
    /// The capability is absent on this host.
    #[error("capability not supported")]
    Unsupported,

    /// The underlying provider failed; its message is passed through.
    #[error("device error: {0}")]
    Device(String),
}
