mod camera;
mod geolocation;

pub use camera::{SyntheticCamera, SyntheticCameraStream, UnsupportedCamera};
pub use geolocation::{FixedGeolocation, UnsupportedGeolocation};
