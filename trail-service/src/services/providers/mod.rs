//! Hosted AI provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction for the hosted text and
//! image generation backends, allowing easy swapping between the OpenAI
//! implementation and mocks.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a text generation call.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Generated text.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

/// Trait for hosted text generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion for `prompt` under the given system instruction.
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<Completion, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

/// Trait for hosted image generation providers.
///
/// Returns the URLs of the generated images; downloading them is the image
/// store's concern.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Request `count` images of the given size for `prompt`.
    async fn generate_images(
        &self,
        prompt: &str,
        count: u8,
        size: &str,
    ) -> Result<Vec<String>, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
