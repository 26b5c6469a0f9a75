//! Dispatchers: format prompts and forward them to the hosted providers.

use crate::models::{GeneratedImage, Topic};
use crate::services::image_store::{filename_from_prompt, ImageStore};
use crate::services::providers::{Completion, ImageProvider, ProviderError, TextProvider};
use std::sync::Arc;

/// System instruction for trail recommendations.
pub const TRAIL_SYSTEM_INSTRUCTION: &str = "As an expert in nature trails, provide \
    recommendations for creekside trails based on location, difficulty level, and \
    visitor preferences.";

/// Safety-oriented system instruction for the information guide.
pub const SAFETY_SYSTEM_INSTRUCTION: &str = "You are an expert on hiking safety and \
    trail information. Provide detailed, practical advice about hiking concerns and \
    safety measures.";

/// Formats user text into a completion request and forwards it.
///
/// One outbound call per invocation; no retry. Failures come back as
/// [`ProviderError`] kinds so callers cannot mistake empty success for
/// failure.
pub struct PromptDispatcher {
    provider: Arc<dyn TextProvider>,
}

impl PromptDispatcher {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Generate a trail recommendation for free-text input.
    pub async fn recommend(&self, prompt: &str) -> Result<Completion, ProviderError> {
        self.provider
            .generate(TRAIL_SYSTEM_INSTRUCTION, prompt)
            .await
    }

    /// Generate explanatory text for a fixed topic. Stateless and
    /// idempotent; unrelated to any chat history.
    pub async fn topic_info(&self, topic: Topic) -> Result<Completion, ProviderError> {
        self.provider
            .generate(SAFETY_SYSTEM_INSTRUCTION, &topic.info_prompt())
            .await
    }

    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.provider.health_check().await
    }
}

/// Derives the trail-environment prompt, requests a fixed count of images
/// and downloads each to a locally derived filename.
pub struct ImageDispatcher {
    provider: Arc<dyn ImageProvider>,
    store: ImageStore,
    count: u8,
    size: String,
}

impl ImageDispatcher {
    pub fn new(
        provider: Arc<dyn ImageProvider>,
        store: ImageStore,
        count: u8,
        size: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            store,
            count,
            size: size.into(),
        }
    }

    /// Secondary prompt derived from the user's trail description.
    pub fn trail_prompt(input: &str) -> String {
        format!("creekside trail environment based on {}", input)
    }

    /// Generate and save images for the given user input.
    ///
    /// A failed download is logged and skipped, so the returned list may be
    /// shorter than the number of URLs the endpoint produced.
    pub async fn generate(&self, input: &str) -> Result<Vec<GeneratedImage>, ProviderError> {
        let prompt = Self::trail_prompt(input);
        let base = filename_from_prompt(&prompt);

        let urls = self
            .provider
            .generate_images(&prompt, self.count, &self.size)
            .await?;

        let mut images = Vec::with_capacity(urls.len());
        for (i, url) in urls.iter().enumerate() {
            let filename = format!("{}_{}.png", base, i + 1);
            match self.store.download(url, &filename).await {
                Ok(_) => images.push(GeneratedImage::new(filename, url.clone())),
                Err(e) => {
                    tracing::warn!(
                        url = %url,
                        filename,
                        error = %e,
                        "Skipping image that failed to download"
                    );
                }
            }
        }

        Ok(images)
    }
}
