use crate::handlers::{load_chat, store_chat};
use crate::models::{ChatTurn, GeneratedImage};
use crate::startup::AppState;
use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use service_core::error::AppError;
use tower_sessions::Session;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct ChatForm {
    #[validate(length(min = 1, message = "Describe the trail you are looking for"))]
    pub prompt: String,

    /// Checkbox: also generate a personalized trail image.
    #[serde(default)]
    pub generate_images: bool,
}

#[derive(Template)]
#[template(path = "partials/chat_response.html")]
pub struct ChatResponseTemplate {
    pub turns: Vec<ChatTurn>,
    pub images: Vec<GeneratedImage>,
    pub prompt: String,
    pub image_error: Option<String>,
}

#[derive(Template)]
#[template(path = "partials/chat_error.html")]
pub struct ChatErrorTemplate {
    pub turns: Vec<ChatTurn>,
    pub message: String,
}

/// Handle a chat submission from the main input or the sidebar replica.
///
/// The user turn is recorded before dispatching, so a failed generation
/// still leaves the attempt in the session history.
pub async fn submit_chat(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ChatForm>,
) -> Result<Response, AppError> {
    form.validate()?;

    let mut chat = load_chat(&session).await?;
    chat.push_user(form.prompt.clone());
    store_chat(&session, &chat).await?;

    match state.prompt_dispatcher.recommend(&form.prompt).await {
        Ok(completion) => {
            chat.push_assistant(completion.text);
            chat.add_usage(completion.input_tokens, completion.output_tokens);
            store_chat(&session, &chat).await?;

            let (images, image_error) = if form.generate_images {
                match state.image_dispatcher.generate(&form.prompt).await {
                    Ok(images) => (images, None),
                    Err(e) => {
                        tracing::error!(error = %e, "Error generating image");
                        (Vec::new(), Some(format!("Error generating image: {}", e)))
                    }
                }
            } else {
                (Vec::new(), None)
            };

            Ok(ChatResponseTemplate {
                turns: chat.turns().to_vec(),
                images,
                prompt: form.prompt,
                image_error,
            }
            .into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Error generating trail recommendation");
            Ok(ChatErrorTemplate {
                turns: chat.turns().to_vec(),
                message: format!("Error generating trail recommendation: {}", e),
            }
            .into_response())
        }
    }
}
