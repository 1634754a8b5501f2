//! Captured photo domain model
//!
//! Photos live only in memory as self-contained data URIs; they are never
//! written to the registry and are lost when the session ends.

use anyhow::{anyhow, Result};
use base64::Engine;
use bytes::Bytes;

use crate::registry::MimeType;

/// One encoded frame as handed over by a camera stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    pub mime_type: MimeType,
    pub bytes: Bytes,
}

/// An in-memory photo, encoded as a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPhoto {
    pub data_uri: String,
    pub captured_at_ms: i64,
}

impl CapturedPhoto {
    pub fn from_frame(frame: &EncodedFrame, captured_at_ms: i64) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&frame.bytes);
        Self {
            data_uri: format!("data:{};base64,{}", frame.mime_type, encoded),
            captured_at_ms,
        }
    }

    /// Decode the data URI back into mime type and raw bytes, e.g. to save
    /// the photo as a file.
    pub fn decode(&self) -> Result<(MimeType, Vec<u8>)> {
        let rest = self
            .data_uri
            .strip_prefix("data:")
            .ok_or_else(|| anyhow!("not a data URI"))?;
        let (mime, encoded) = rest
            .split_once(";base64,")
            .ok_or_else(|| anyhow!("data URI is not base64 encoded"))?;
        let bytes = base64::engine::general_purpose::STANDARD.decode(encoded)?;
        Ok((MimeType(mime.to_string()), bytes))
    }
}

/// The in-memory photo gallery. Positional identity, like the registry.
#[derive(Debug, Clone, Default)]
pub struct PhotoGallery {
    photos: Vec<CapturedPhoto>,
}

impl PhotoGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, photo: CapturedPhoto) {
        self.photos.push(photo);
    }

    /// Out of bounds is a no-op and returns `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<CapturedPhoto> {
        if index >= self.photos.len() {
            return None;
        }
        Some(self.photos.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&CapturedPhoto> {
        self.photos.get(index)
    }

    pub fn photos(&self) -> &[CapturedPhoto] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}
