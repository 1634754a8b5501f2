//! User commands.
//!
//! Every discrete UI action becomes one command consumed by the controller,
//! decoupling event wiring from registry logic.

use serde::{Deserialize, Serialize};

use crate::registry::FileRecord;

/// A discrete user action.
///
/// 一次用户操作。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// A drop or file-picker selection delivered a batch of files.
    Append(Vec<FileRecord>),
    /// Per-item remove action.
    Remove(usize),
    /// Filter inputs changed. `max_size_mb_raw` is the untrimmed text of the
    /// size input, in megabytes.
    SetFilter {
        type_contains: String,
        max_size_mb_raw: String,
    },
    /// Per-item download action.
    Download(usize),
    /// Location-request trigger.
    RequestLocation,
    /// Camera-start trigger.
    StartCamera,
    /// Capture trigger; legal only while streaming.
    CapturePhoto,
    /// Per-photo download action.
    DownloadPhoto(usize),
    /// Per-photo delete action.
    DeletePhoto(usize),
}
