//! Ports: the seams between the domain and the outside world.
//!
//! Concrete adapters live in `ud-infra`; everything here is a contract.

mod camera;
mod clock;
mod download_sink;
mod geolocation;
mod registry_store;

pub use camera::{CameraPort, CameraStreamPort};
pub use clock::ClockPort;
pub use download_sink::DownloadSinkPort;
pub use geolocation::GeolocationPort;
pub use registry_store::RegistryStorePort;
