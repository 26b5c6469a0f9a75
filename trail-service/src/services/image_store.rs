//! Local storage for downloaded generated images.

use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for image download and storage.
#[derive(Error, Debug)]
pub enum ImageStoreError {
    #[error("Download failed with status {0}")]
    Status(StatusCode),

    #[error("Network error: {0}")]
    Network(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Derive a filename base from a prompt: keep alphanumerics and spaces,
/// take the first three whitespace-separated tokens, join with underscores.
///
/// Deterministic, so repeated identical prompts collide by construction.
pub fn filename_from_prompt(prompt: &str) -> String {
    let alphanum: String = prompt
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect();

    alphanum
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join("_")
}

/// Downloads image bytes into a local output directory.
pub struct ImageStore {
    client: Client,
    output_dir: PathBuf,
}

impl ImageStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fetch `url` and write the bytes to `filename` under the output
    /// directory. A non-success status fails without touching disk.
    ///
    /// Repeated prompts derive the same filename; the replacement is logged
    /// rather than prevented.
    pub async fn download(&self, url: &str, filename: &str) -> Result<PathBuf, ImageStoreError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageStoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageStoreError::Status(response.status()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageStoreError::Network(e.to_string()))?;

        let path = self.output_dir.join(filename);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::warn!(filename, "Overwriting existing generated image");
        }

        tokio::fs::write(&path, &bytes).await?;

        tracing::debug!(filename, bytes = bytes.len(), "Saved generated image");
        Ok(path)
    }
}
