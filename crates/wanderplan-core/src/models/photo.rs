//! Opaque photo references attached to spots.

use serde::{Deserialize, Serialize};

/// An opaque reference to an uploaded photo.
///
/// The core never decodes the image payload; references are appended,
/// removed, and reordered as atomic blobs. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(String);

impl PhotoRef {
    /// Wraps an encoded image reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The raw reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PhotoRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}
