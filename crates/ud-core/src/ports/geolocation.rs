use async_trait::async_trait;

use crate::capture::{CaptureError, GeoFix};

/// Wraps the host's geolocation provider.
///
/// One asynchronous fix per request; no retries, no timeout, no
/// cancellation. The handler awaiting the fix is the only thing suspended.
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    async fn current_fix(&self) -> Result<GeoFix, CaptureError>;
}
