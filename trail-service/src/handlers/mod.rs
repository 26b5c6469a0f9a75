//! HTTP handlers for the trail service.

pub mod app;
pub mod chat;
pub mod topics;

use crate::models::ChatSession;
use service_core::error::AppError;
use tower_sessions::Session;

/// Key the chat context is stored under in the session layer.
pub(crate) const CHAT_SESSION_KEY: &str = "chat_session";

/// Load the chat context for this browser session, creating a fresh one on
/// first interaction.
pub(crate) async fn load_chat(session: &Session) -> Result<ChatSession, AppError> {
    Ok(session
        .get::<ChatSession>(CHAT_SESSION_KEY)
        .await
        .map_err(session_error)?
        .unwrap_or_default())
}

/// Store the chat context back into the session layer.
pub(crate) async fn store_chat(session: &Session, chat: &ChatSession) -> Result<(), AppError> {
    session
        .insert(CHAT_SESSION_KEY, chat)
        .await
        .map_err(session_error)
}

fn session_error(err: tower_sessions::session::Error) -> AppError {
    AppError::InternalError(anyhow::anyhow!("Session store error: {}", err))
}
