use async_trait::async_trait;
use ud_core::{
    capture::{CaptureError, GeoFix},
    ports::GeolocationPort,
};

/// Geolocation adapter returning a pre-configured fix.
///
/// Stands in for a real locator on hosts that expose one through
/// configuration (kiosk installs, tests, demos).
pub struct FixedGeolocation {
    fix: GeoFix,
}

impl FixedGeolocation {
    pub fn new(fix: GeoFix) -> Self {
        Self { fix }
    }
}

#[async_trait]
impl GeolocationPort for FixedGeolocation {
    async fn current_fix(&self) -> Result<GeoFix, CaptureError> {
        Ok(self.fix)
    }
}

/// Geolocation adapter for hosts without any locator capability.
pub struct UnsupportedGeolocation;

#[async_trait]
impl GeolocationPort for UnsupportedGeolocation {
    async fn current_fix(&self) -> Result<GeoFix, CaptureError> {
        Err(CaptureError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_geolocation_returns_the_configured_fix() {
        let provider = FixedGeolocation::new(GeoFix::new(31.2304, 121.4737));
        let fix = provider.current_fix().await.unwrap();
        assert_eq!(fix.latitude, 31.2304);
        assert_eq!(fix.longitude, 121.4737);
    }

    #[tokio::test]
    async fn unsupported_geolocation_reports_missing_capability() {
        let provider = UnsupportedGeolocation;
        assert_eq!(
            provider.current_fix().await.unwrap_err(),
            CaptureError::Unsupported
        );
    }
}
