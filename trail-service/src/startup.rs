//! Application startup and lifecycle management.

use crate::config::TrailConfig;
use crate::handlers::{
    app::{chat_page, health_check, index, promo_logo, readiness_check},
    chat::submit_chat,
    topics::topic_info,
};
use crate::services::providers::openai::{OpenAiConfig, OpenAiImageProvider, OpenAiTextProvider};
use crate::services::providers::{ImageProvider, TextProvider};
use crate::services::{ImageDispatcher, ImageStore, PromptDispatcher};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::tracing::request_id_middleware;
use std::net::SocketAddr;
use std::sync::Arc;
use time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: TrailConfig,
    pub prompt_dispatcher: Arc<PromptDispatcher>,
    pub image_dispatcher: Arc<ImageDispatcher>,
}

pub fn build_router(state: AppState) -> Router {
    // Per-browser chat context lives in the session layer; entries are
    // dropped on inactivity, nothing survives a restart.
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    let generated_dir = state.config.images.output_dir.clone();

    Router::new()
        .route("/", get(index))
        .route("/chat", get(chat_page).post(submit_chat))
        .route("/topics/info", get(topic_info))
        .route("/promo/logo", get(promo_logo))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .nest_service("/static", ServeDir::new("trail-service/static"))
        .nest_service("/generated", ServeDir::new(generated_dir))
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration, wiring the
    /// OpenAI providers into the dispatchers.
    pub async fn build(config: TrailConfig) -> Result<Self, AppError> {
        let text_provider: Arc<dyn TextProvider> = Arc::new(OpenAiTextProvider::new(OpenAiConfig {
            api_key: config.openai.api_key.clone(),
            api_base: config.openai.api_base.clone(),
            model: config.openai.text_model.clone(),
        }));

        let image_provider: Arc<dyn ImageProvider> =
            Arc::new(OpenAiImageProvider::new(OpenAiConfig {
                api_key: config.openai.api_key.clone(),
                api_base: config.openai.api_base.clone(),
                model: config.openai.image_model.clone(),
            }));

        tracing::info!(
            text_model = %config.openai.text_model,
            image_model = %config.openai.image_model,
            "Initialized OpenAI providers"
        );

        Self::build_with_providers(config, text_provider, image_provider).await
    }

    /// Build the application with explicit providers. Tests use this to
    /// substitute mocks.
    pub async fn build_with_providers(
        config: TrailConfig,
        text_provider: Arc<dyn TextProvider>,
        image_provider: Arc<dyn ImageProvider>,
    ) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(&config.images.output_dir)
            .await
            .map_err(|e| {
                tracing::error!(
                    dir = %config.images.output_dir,
                    "Failed to create image output directory: {}", e
                );
                AppError::from(e)
            })?;

        let store = ImageStore::new(&config.images.output_dir);

        let state = AppState {
            prompt_dispatcher: Arc::new(PromptDispatcher::new(text_provider)),
            image_dispatcher: Arc::new(ImageDispatcher::new(
                image_provider,
                store,
                config.images.count,
                config.images.size.clone(),
            )),
            config,
        };

        // Port 0 binds a random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Trail service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
