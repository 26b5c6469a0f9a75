//! Mock provider implementations for testing.

use super::{Completion, ImageProvider, ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider for testing.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _system_instruction: &str,
        prompt: &str,
    ) -> Result<Completion, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(Completion {
            text: format!("Mock trail recommendation for: {}", prompt),
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: 10,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ))
        }
    }
}

/// Mock image provider for testing.
///
/// Returns the configured URLs, truncated to the requested count.
pub struct MockImageProvider {
    enabled: bool,
    urls: Vec<String>,
}

impl MockImageProvider {
    pub fn new(enabled: bool, urls: Vec<String>) -> Self {
        Self { enabled, urls }
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn generate_images(
        &self,
        _prompt: &str,
        count: u8,
        _size: &str,
    ) -> Result<Vec<String>, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock image provider not enabled".to_string(),
            ));
        }

        Ok(self.urls.iter().take(count as usize).cloned().collect())
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock image provider not enabled".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_text_echoes_the_prompt() {
        let provider = MockTextProvider::new(true);
        let completion = provider.generate("system", "creekside loop").await.unwrap();
        assert!(completion.text.contains("creekside loop"));
    }

    #[tokio::test]
    async fn disabled_mock_reports_not_configured() {
        let provider = MockTextProvider::new(false);
        let err = provider.generate("system", "anything").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn mock_images_respect_the_requested_count() {
        let provider = MockImageProvider::new(
            true,
            vec![
                "https://img.example/a.png".to_string(),
                "https://img.example/b.png".to_string(),
                "https://img.example/c.png".to_string(),
            ],
        );
        let urls = provider.generate_images("prompt", 2, "1024x1024").await.unwrap();
        assert_eq!(urls.len(), 2);
    }
}
