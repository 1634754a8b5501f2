use std::sync::Arc;

use crate::ports::PresenterPort;
use ud_core::ports::{CameraPort, ClockPort, DownloadSinkPort, GeolocationPort, RegistryStorePort};

/// Dependency grouping for the controller.
///
/// This struct IS the dependency manifest.
/// 这个结构体就是依赖清单。
///
/// All ports must be provided - no defaults, no optionals.
pub struct ControllerDeps {
    pub store: Arc<dyn RegistryStorePort>,
    pub downloads: Arc<dyn DownloadSinkPort>,
    pub geolocation: Arc<dyn GeolocationPort>,
    pub camera: Arc<dyn CameraPort>,
    pub clock: Arc<dyn ClockPort>,
    pub presenter: Arc<dyn PresenterPort>,
}
