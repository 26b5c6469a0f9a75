//! Generated image record.

use serde::{Deserialize, Serialize};

/// An image produced by one generation call and saved to local disk.
///
/// Files are never cleaned up; the only relation back to a session is the
/// display-time caption pairing the file with the prompt that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Local filename derived from the prompt keywords.
    pub filename: String,

    /// URL the bytes were fetched from.
    pub source_url: String,
}

impl GeneratedImage {
    pub fn new(filename: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            source_url: source_url.into(),
        }
    }
}
