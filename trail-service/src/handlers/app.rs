use crate::handlers::load_chat;
use crate::models::{ChatTurn, Topic};
use crate::startup::AppState;
use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use service_core::error::AppError;
use std::path::Path;
use tower_sessions::Session;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub topics: &'static [Topic],
    pub turns: Vec<ChatTurn>,
    pub promo_available: bool,
}

/// Trail explorer page: sidebar chat with image toggle, topic guide and the
/// promotional block.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let chat = load_chat(&session).await?;

    let promo_available = Path::new(&state.config.images.promo_asset).exists();
    if !promo_available {
        tracing::warn!(
            asset = %state.config.images.promo_asset,
            "Promotional image not found, skipping display"
        );
    }

    Ok(IndexTemplate {
        topics: &Topic::ALL,
        turns: chat.turns().to_vec(),
        promo_available,
    })
}

#[derive(Template)]
#[template(path = "chat.html")]
pub struct ChatPageTemplate {
    pub turns: Vec<ChatTurn>,
}

/// Plain chat page sharing the same session store and dispatcher.
pub async fn chat_page(session: Session) -> Result<impl IntoResponse, AppError> {
    let chat = load_chat(&session).await?;

    Ok(ChatPageTemplate {
        turns: chat.turns().to_vec(),
    })
}

/// Serve the promotional logo from its configured path.
///
/// The asset lives wherever the operator put it, not under the static
/// directory, so it gets its own route.
pub async fn promo_logo(State(state): State<AppState>) -> Result<Response, AppError> {
    match tokio::fs::read(&state.config.images.promo_asset).await {
        Ok(bytes) => Ok((
            [(axum::http::header::CONTENT_TYPE, "image/png")],
            bytes,
        )
            .into_response()),
        Err(e) => {
            tracing::warn!(
                asset = %state.config.images.promo_asset,
                "Failed to read promotional image: {}", e
            );
            Err(AppError::NotFound(anyhow::anyhow!(
                "Promotional image not available"
            )))
        }
    }
}

/// Health check endpoint for liveness probes.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "trail-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check endpoint.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
