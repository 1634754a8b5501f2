//! File record domain model
//!
//! One user-added file: display title, mime type, size, and the opaque
//! payload needed to rebuild a downloadable copy.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::MimeType;

/// A single file the user has added to the registry.
///
/// Serialized field names follow the persisted slot shape:
/// `name` / `type` / `size` / `payload`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,

    #[serde(rename = "type")]
    pub mime_type: MimeType,

    #[serde(rename = "size")]
    pub size_bytes: u64,

    #[serde(
        serialize_with = "serialize_payload",
        deserialize_with = "deserialize_payload"
    )]
    payload: Bytes,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, mime_type: MimeType, payload: Bytes) -> Self {
        let size_bytes = payload.len() as u64;
        Self {
            name: name.into(),
            mime_type,
            size_bytes,
            payload,
        }
    }

    /// Build a record whose declared size differs from the payload length.
    ///
    /// The slot format stores size separately from the payload, so a
    /// round-tripped record keeps whatever size was declared at insert time.
    pub fn with_declared_size(
        name: impl Into<String>,
        mime_type: MimeType,
        size_bytes: u64,
        payload: Bytes,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type,
            size_bytes,
            payload,
        }
    }

    pub fn payload(&self) -> Bytes {
        self.payload.clone()
    }
}

/// Helper to serialize the payload as base64
fn serialize_payload<S>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use base64::Engine;
    let base64_string = base64::engine::general_purpose::STANDARD.encode(bytes);
    serializer.serialize_str(&base64_string)
}

/// Helper to deserialize the payload from base64
fn deserialize_payload<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use base64::Engine;
    let base64_string = String::deserialize(deserializer)?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(&base64_string)
        .map_err(|e: base64::DecodeError| serde::de::Error::custom(e.to_string()))?;
    Ok(Bytes::from(bytes))
}
