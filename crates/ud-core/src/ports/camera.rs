use async_trait::async_trait;

use crate::capture::{CaptureError, EncodedFrame};

/// A live video stream handle.
///
/// Grabbing a frame is a synchronous snapshot encode against an already
/// open stream.
pub trait CameraStreamPort: Send + Sync {
    fn grab_frame(&self) -> Result<EncodedFrame, CaptureError>;
}

/// Wraps the host's camera provider.
#[async_trait]
pub trait CameraPort: Send + Sync {
    /// Acquire a live stream. Errors map to `Unsupported` when the
    /// capability is absent and `Device` for provider failures.
    async fn open(&self) -> Result<Box<dyn CameraStreamPort>, CaptureError>;
}
