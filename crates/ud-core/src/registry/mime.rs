use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn image_png() -> Self {
        Self("image/png".into())
    }
    pub fn text_plain() -> Self {
        Self("text/plain".into())
    }
    pub fn application_octet_stream() -> Self {
        Self("application/octet-stream".into())
    }

    /// Case-sensitive substring match, the way the type filter sees it.
    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MimeType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MimeType(s.to_string()))
    }
}
