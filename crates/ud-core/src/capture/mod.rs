//! Capture domain: geolocation fixes and camera photos.

mod camera;
mod error;
mod geolocation;
mod photo;

pub use camera::{
    CameraSessionAction, CameraSessionEvent, CameraSessionMachine, CameraSessionState,
};
pub use error::CaptureError;
pub use geolocation::GeoFix;
pub use photo::{CapturedPhoto, EncodedFrame, PhotoGallery};
