use serde::Serialize;
use ud_core::CapturedPhoto;

/// A read-only projection of a captured photo for the gallery.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PhotoView {
    /// Position in the gallery
    pub index: usize,

    /// Self-contained image, renderable as-is
    pub data_uri: String,

    pub captured_at_ms: i64,
}

impl PhotoView {
    pub fn from_photo(index: usize, photo: &CapturedPhoto) -> Self {
        Self {
            index,
            data_uri: photo.data_uri.clone(),
            captured_at_ms: photo.captured_at_ms,
        }
    }
}
