use crate::services::providers::openai::OPENAI_API_BASE;
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default number of images requested per generation call.
const DEFAULT_IMAGE_COUNT: u8 = 2;

#[derive(Debug, Clone)]
pub struct TrailConfig {
    pub common: core_config::Config,
    pub openai: OpenAiSettings,
    pub images: ImageSettings,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// Bearer credential for the hosted API.
    pub api_key: Secret<String>,
    /// API base URL; overridable for tests.
    pub api_base: String,
    /// Model for chat completions (e.g. gpt-3.5-turbo).
    pub text_model: String,
    /// Model for image generation (e.g. dall-e-2).
    pub image_model: String,
}

#[derive(Debug, Clone)]
pub struct ImageSettings {
    /// Images requested per generation call.
    pub count: u8,
    /// Requested image size.
    pub size: String,
    /// Directory downloaded images are written to.
    pub output_dir: String,
    /// Path of the promotional logo asset.
    pub promo_asset: String,
}

impl TrailConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(TrailConfig {
            common,
            openai: OpenAiSettings {
                api_key: Secret::new(get_env("OPENAI_API_KEY", None, is_prod)?),
                api_base: get_env("OPENAI_API_BASE", Some(OPENAI_API_BASE), is_prod)?,
                text_model: get_env("TRAIL_TEXT_MODEL", Some("gpt-3.5-turbo"), is_prod)?,
                image_model: get_env("TRAIL_IMAGE_MODEL", Some("dall-e-2"), is_prod)?,
            },
            images: ImageSettings {
                count: get_env(
                    "TRAIL_IMAGE_COUNT",
                    Some(&DEFAULT_IMAGE_COUNT.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_IMAGE_COUNT),
                size: get_env("TRAIL_IMAGE_SIZE", Some("1024x1024"), is_prod)?,
                output_dir: get_env("TRAIL_IMAGE_OUTPUT_DIR", Some("."), is_prod)?,
                promo_asset: get_env("TRAIL_PROMO_ASSET", Some("alltrail.png"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
